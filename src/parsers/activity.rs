//! "My Activity" exports, including YouTube `watch-history.json` and
//! `search-history.json`, which share the same shape.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{Activity, Details, LocationInfo, Subtitles};
use crate::parsers::fields::{Element, top_level_array};
use crate::parsers::timestamps::from_iso_string;

/// Lazily extract [`Activity`] records from a parsed My Activity document.
///
/// The document must be a JSON array. Each element needs `header`, `title` and
/// `time`; `titleUrl` and `description` are optional, and the nested
/// `subtitles`, `details`, `locationInfos` and `products` arrays default to empty.
///
/// # Errors
///
/// Returns [`Error::UnexpectedShape`] up front when the document is not an array.
/// Element failures are yielded in place of the element:
/// - missing `header`/`title` (or a subtitle/detail `name`) → [`Error::MissingField`]
/// - missing or undecodable `time` → [`Error::MalformedTimestamp`]
pub fn parse_activities(
    document: &Value,
) -> Result<impl Iterator<Item = Result<Activity>> + '_> {
    let items = top_level_array(document, None, "a JSON array of activity entries")?;
    Ok(items.iter().enumerate().map(|(index, blob)| parse_activity(&Element::new(index, blob))))
}

fn parse_activity(blob: &Element<'_>) -> Result<Activity> {
    let header = blob.required_str("header")?.to_string();
    let title = blob.required_str("title")?.to_string();
    let title_url = blob.optional_str("titleUrl")?.map(str::to_string);
    let description = blob.optional_str("description")?.map(str::to_string);

    // an activity without a time has no meaningful default
    let time = blob.strict_timestamp_with("time", from_iso_string)?;

    let subtitles = blob
        .array_or_empty("subtitles")?
        .iter()
        .enumerate()
        .map(|(i, s)| -> Result<Subtitles> {
            let s = blob.nested(format!("subtitles[{i}]."), s);
            Ok(Subtitles {
                name: s.required_str("name")?.to_string(),
                url: s.optional_str("url")?.map(str::to_string),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let details = blob
        .array_or_empty("details")?
        .iter()
        .enumerate()
        .map(|(i, d)| -> Result<Details> {
            let d = blob.nested(format!("details[{i}]."), d);
            Ok(Details { name: d.required_str("name")?.to_string() })
        })
        .collect::<Result<Vec<_>>>()?;

    let location_infos = blob
        .array_or_empty("locationInfos")?
        .iter()
        .enumerate()
        .map(|(i, l)| -> Result<LocationInfo> {
            let l = blob.nested(format!("locationInfos[{i}]."), l);
            Ok(LocationInfo {
                name: l.optional_str("name")?.map(str::to_string),
                url: l.optional_str("url")?.map(str::to_string),
                source: l.optional_str("source")?.map(str::to_string),
                source_url: l.optional_str("sourceUrl")?.map(str::to_string),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let products = blob
        .array_or_empty("products")?
        .iter()
        .enumerate()
        .map(|(i, p)| match p {
            Value::String(product) => Ok(product.clone()),
            _ => Err(Error::InvalidField {
                index: blob.index(),
                field: format!("products[{i}]"),
                expected: "a string",
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Activity {
        header,
        title,
        title_url,
        description,
        time,
        subtitles,
        details,
        location_infos,
        products,
    })
}
