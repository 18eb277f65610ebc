use serde::{Deserialize, Serialize};

use crate::parsers::timestamps::Timestamp;

/// Template for the watch URL synthesized from a video identifier
pub const YOUTUBE_WATCH_URL: &str = "https://youtube.com/watch?v=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedYoutubeVideo {
    pub title: String,
    pub desc: String,
    pub link: String,
    pub dt: Timestamp,
}

impl LikedYoutubeVideo {
    pub fn watch_url(video_id: &str) -> String {
        format!("{}{}", YOUTUBE_WATCH_URL, video_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStoreAppInstall {
    pub title: String,
    /// Absent for installs that predate device tracking
    pub device_name: Option<String>,
    pub dt: Timestamp,
}

/// A location ping in decimal degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lng: f64,
    pub lat: f64,
    pub dt: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeHistory {
    pub title: String,
    pub url: String,
    pub dt: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangoutsMessage {
    pub text: Option<String>,
    pub link: Option<String>,
    pub dt: Timestamp,
}
