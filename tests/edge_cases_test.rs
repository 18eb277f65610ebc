/// Edge case integration tests
///
/// These tests cover malformed files, partial elements and other unusual inputs
mod common;

use common::{ACTIVITY_PATH, ActivityBuilder, CHROME_PATH, LOCATION_PATH, TakeoutDirBuilder, export_path};
use serde_json::json;
use takeout_parser::export::{collect_lenient, collect_strict};
use takeout_parser::{Error, ErrorKind, ExportFile, ExportFormat, parse_file};

#[test]
fn test_edge_case_missing_file() {
    let root = TakeoutDirBuilder::new().build();
    let err = parse_file(export_path(&root, CHROME_PATH), ExportFormat::ChromeHistory).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("BrowserHistory.json"));
}

#[test]
fn test_edge_case_truncated_json() {
    let root = TakeoutDirBuilder::new()
        .with_file(CHROME_PATH, r#"{"Browser History": [{"title": "a", "url": "#)
        .build();

    let err = ExportFile::open(export_path(&root, CHROME_PATH), ExportFormat::ChromeHistory)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedJson);
    assert!(matches!(err, Error::MalformedJson { .. }));
}

#[test]
fn test_edge_case_empty_file_is_malformed_json() {
    let root = TakeoutDirBuilder::new().with_file(ACTIVITY_PATH, "").build();
    let err = parse_file(export_path(&root, ACTIVITY_PATH), ExportFormat::Activity).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedJson);
}

#[test]
fn test_edge_case_empty_array() {
    let root = TakeoutDirBuilder::new().with_file(ACTIVITY_PATH, "[]").build();
    let records = parse_file(export_path(&root, ACTIVITY_PATH), ExportFormat::Activity).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_edge_case_missing_title_is_attributed_to_file_and_element() {
    let root = TakeoutDirBuilder::new()
        .with_json(
            ACTIVITY_PATH,
            &json!([
                ActivityBuilder::new("ok").to_json(),
                ActivityBuilder::new("ok").to_json(),
                ActivityBuilder::new("broken").without("title").to_json(),
            ]),
        )
        .build();

    let err = parse_file(export_path(&root, ACTIVITY_PATH), ExportFormat::Activity).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingField);
    assert_eq!(err.index(), Some(2));
    assert_eq!(err.field(), Some("title"));

    let message = err.to_string();
    assert!(message.contains("MyActivity.json"));
    assert!(message.contains("element 2"));
}

#[test]
fn test_edge_case_lenient_collection_skips_bad_element() {
    let root = TakeoutDirBuilder::new()
        .with_json(
            ACTIVITY_PATH,
            &json!([
                ActivityBuilder::new("first").to_json(),
                ActivityBuilder::new("no time").without("time").to_json(),
                ActivityBuilder::new("third").to_json(),
            ]),
        )
        .build();

    let file = ExportFile::open(export_path(&root, ACTIVITY_PATH), ExportFormat::Activity).unwrap();

    let strict = collect_strict(file.records().unwrap()).unwrap_err();
    assert_eq!(strict.kind(), ErrorKind::MalformedTimestamp);

    let (records, stats) = collect_lenient(file.records().unwrap()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(stats.skipped, 1);
    assert_eq!(records[1].timestamp(), records[0].timestamp());
}

#[test]
fn test_edge_case_wrong_format_tag_fails_lenient_collection() {
    // A My Activity array read as likes: every element lacks `snippet`
    let root = TakeoutDirBuilder::new()
        .with_json(
            ACTIVITY_PATH,
            &json!([ActivityBuilder::new("a").to_json(), ActivityBuilder::new("b").to_json()]),
        )
        .build();

    let file =
        ExportFile::open(export_path(&root, ACTIVITY_PATH), ExportFormat::LikedVideos).unwrap();
    let err = collect_lenient(file.records().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooManyFailures);
}

#[test]
fn test_edge_case_location_history_with_non_string_timestamp() {
    let root = TakeoutDirBuilder::new()
        .with_json(
            LOCATION_PATH,
            &json!({"locations": [
                {"timestampMs": 1561982400000_i64, "latitudeE7": 0, "longitudeE7": 0},
                {"timestampMs": true, "latitudeE7": 0, "longitudeE7": 0}
            ]}),
        )
        .build();

    let file =
        ExportFile::open(export_path(&root, LOCATION_PATH), ExportFormat::LocationHistory).unwrap();
    let results: Vec<_> = file.records().unwrap().collect();

    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::MalformedTimestamp);
}

#[test]
fn test_edge_case_unicode_titles() {
    let root = TakeoutDirBuilder::new()
        .with_json(
            ACTIVITY_PATH,
            &json!([
                ActivityBuilder::new("Hello 👋 World 🌍").to_json(),
                ActivityBuilder::new("测试 中文 テスト").to_json(),
                ActivityBuilder::new("مرحبا العالم").to_json(),
            ]),
        )
        .build();

    let records = parse_file(export_path(&root, ACTIVITY_PATH), ExportFormat::Activity).unwrap();
    let titles: Vec<_> = records
        .iter()
        .map(|r| match r {
            takeout_parser::Record::Activity(a) => a.title.as_str(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(titles, vec!["Hello 👋 World 🌍", "测试 中文 テスト", "مرحبا العالم"]);
}

#[test]
fn test_edge_case_null_optional_fields() {
    let mut activity = ActivityBuilder::new("nulls").to_json();
    activity["titleUrl"] = json!(null);
    activity["subtitles"] = json!(null);
    let root = TakeoutDirBuilder::new().with_json(ACTIVITY_PATH, &json!([activity])).build();

    let records = parse_file(export_path(&root, ACTIVITY_PATH), ExportFormat::Activity).unwrap();
    let takeout_parser::Record::Activity(activity) = &records[0] else { panic!() };
    assert!(activity.title_url.is_none());
    assert!(activity.subtitles.is_empty());
}
