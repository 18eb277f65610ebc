//! Chrome `BrowserHistory.json`

use serde_json::Value;

use crate::error::Result;
use crate::models::ChromeHistory;
use crate::parsers::fields::{Element, top_level_array};
use crate::parsers::timestamps::{from_epoch_micros, from_epoch_micros_string};

/// Lazily extract [`ChromeHistory`] visits from the `"Browser History"` array.
///
/// `title`, `url` and `time_usec` (epoch microseconds) are required.
pub fn parse_chrome_history(
    document: &Value,
) -> Result<impl Iterator<Item = Result<ChromeHistory>> + '_> {
    let items =
        top_level_array(document, Some("Browser History"), "an object with a `Browser History` array")?;
    Ok(items.iter().enumerate().map(|(index, visit)| parse_visit(&Element::new(index, visit))))
}

fn parse_visit(visit: &Element<'_>) -> Result<ChromeHistory> {
    Ok(ChromeHistory {
        title: visit.required_str("title")?.to_string(),
        url: visit.required_str("url")?.to_string(),
        dt: visit.epoch_timestamp_with("time_usec", from_epoch_micros, from_epoch_micros_string)?,
    })
}
