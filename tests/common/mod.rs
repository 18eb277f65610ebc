//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

pub const ACTIVITY_PATH: &str = "Takeout/My Activity/YouTube/MyActivity.json";
pub const WATCH_HISTORY_PATH: &str = "Takeout/YouTube and YouTube Music/history/watch-history.json";
pub const LIKES_PATH: &str = "Takeout/YouTube and YouTube Music/playlists/likes.json";
pub const INSTALLS_PATH: &str = "Takeout/Google Play Store/Installs.json";
pub const LOCATION_PATH: &str = "Takeout/Location History/Location History.json";
pub const CHROME_PATH: &str = "Takeout/Chrome/BrowserHistory.json";
pub const HANGOUTS_PATH: &str = "Takeout/Hangouts/Hangouts.json";

/// Builder for creating fake Takeout archive layouts
pub struct TakeoutDirBuilder {
    temp_dir: TempDir,
}

impl TakeoutDirBuilder {
    /// Create a new builder with an empty archive root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content at a path relative to the archive root
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("relative path has a parent"))
            .expect("Failed to create export directory");
        fs::write(&path, content).expect("Failed to write export file");
        self
    }

    pub fn with_json(self, relative: &str, value: &Value) -> Self {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize JSON");
        self.with_file(relative, &content)
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for TakeoutDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Absolute path of an export inside a built archive
pub fn export_path(root: &TempDir, relative: &str) -> PathBuf {
    root.path().join(relative)
}

/// Builder for My Activity entries
pub struct ActivityBuilder {
    value: Value,
}

impl ActivityBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            value: json!({
                "header": "YouTube",
                "title": title,
                "time": "2019-07-01T12:00:00.000Z"
            }),
        }
    }

    pub fn time(mut self, time: &str) -> Self {
        self.value["time"] = json!(time);
        self
    }

    pub fn title_url(mut self, url: &str) -> Self {
        self.value["titleUrl"] = json!(url);
        self
    }

    pub fn subtitle(mut self, name: &str, url: Option<&str>) -> Self {
        let mut subtitle = json!({"name": name});
        if let Some(url) = url {
            subtitle["url"] = json!(url);
        }
        push(&mut self.value, "subtitles", subtitle);
        self
    }

    pub fn product(mut self, product: &str) -> Self {
        push(&mut self.value, "products", json!(product));
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.value.as_object_mut().expect("activity is an object").remove(key);
        self
    }

    pub fn to_json(&self) -> Value {
        self.value.clone()
    }
}

fn push(value: &mut Value, key: &str, item: Value) {
    match value.get_mut(key).and_then(Value::as_array_mut) {
        Some(items) => items.push(item),
        None => value[key] = json!([item]),
    }
}

pub fn liked_video(video_id: &str, title: &str) -> Value {
    json!({
        "kind": "youtube#playlistItem",
        "snippet": {
            "title": title,
            "description": format!("Description of {title}"),
            "publishedAt": "2019-07-01T12:00:00.000Z"
        },
        "contentDetails": {"videoId": video_id, "videoPublishedAt": "2010-01-01T00:00:00.000Z"}
    })
}

pub fn app_install(title: &str, device: Option<&str>, time: &str) -> Value {
    let mut install = json!({
        "install": {
            "doc": {"documentType": "Android Apps", "title": title},
            "firstInstallationTime": time
        }
    });
    if let Some(device) = device {
        install["install"]["deviceAttribute"] = json!({"deviceDisplayName": device});
    }
    install
}

pub fn location_point(lat_e7: i64, lng_e7: i64, timestamp_ms: &str) -> Value {
    json!({"timestampMs": timestamp_ms, "latitudeE7": lat_e7, "longitudeE7": lng_e7, "accuracy": 10})
}

pub fn chrome_visit(title: &str, url: &str, time_usec: i64) -> Value {
    json!({"page_transition": "LINK", "title": title, "url": url, "time_usec": time_usec})
}

pub fn hangouts_text_event(timestamp_us: &str, texts: &[&str]) -> Value {
    let segments: Vec<Value> = texts.iter().map(|t| json!({"type": "TEXT", "text": t})).collect();
    json!({
        "timestamp": timestamp_us,
        "chat_message": {"message_content": {"segment": segments}}
    })
}

/// A realistic archive with one file of every default format plus Hangouts
pub fn realistic_takeout_dir() -> TempDir {
    TakeoutDirBuilder::new()
        .with_json(
            ACTIVITY_PATH,
            &json!([
                ActivityBuilder::new("Watched Rust in 100 Seconds")
                    .title_url("https://www.youtube.com/watch?v=5C_HPTJg5ek")
                    .subtitle("Fireship", Some("https://www.youtube.com/channel/UCsBjURrPoezykLs9EqgamOA"))
                    .product("YouTube")
                    .to_json(),
                ActivityBuilder::new("Searched for borrow checker")
                    .time("2019-07-02T08:30:00.000Z")
                    .to_json(),
            ]),
        )
        .with_json(LIKES_PATH, &json!([liked_video("abc123", "A liked video")]))
        .with_json(
            INSTALLS_PATH,
            &json!([
                app_install("Google Maps", Some("Pixel 3"), "2018-02-03T04:05:06.000Z"),
                app_install("Old App", None, "2012-01-01T00:00:00.000Z"),
            ]),
        )
        .with_json(
            LOCATION_PATH,
            &json!({"locations": [
                location_point(377490000, -1223000000, "1561982400000"),
                location_point(377490100, -1223000100, "1561982460000"),
            ]}),
        )
        .with_json(
            CHROME_PATH,
            &json!({"Browser History": [
                chrome_visit("Rust", "https://www.rust-lang.org/", 1561982400000000),
            ]}),
        )
        .with_json(
            HANGOUTS_PATH,
            &json!({"conversations": [{"events": [
                hangouts_text_event("1561982400000000", &["hello", "world"]),
            ]}]}),
        )
        .build()
}
