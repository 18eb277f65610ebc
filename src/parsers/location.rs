//! Location History (`Location History.json` / `Records.json`)
//!
//! Some archives contain runs of records with identical or adjacent timestamps,
//! which looks like duplicated or coarsely sampled data upstream. Records are
//! yielded exactly as stored: no deduplication, no ordering check.

use serde_json::Value;

use crate::error::Result;
use crate::models::Location;
use crate::parsers::fields::{Element, top_level_array};
use crate::parsers::timestamps::{from_epoch_millis, from_epoch_millis_string};

/// Scale of the fixed-point `*E7` coordinates
pub const E7_SCALE: f64 = 10_000_000.0;

/// Lazily extract [`Location`] records from the `locations` array.
///
/// Each element needs `longitudeE7`, `latitudeE7` (integers scaled by 10^7) and
/// `timestampMs` (epoch milliseconds, normally a string of digits).
pub fn parse_locations(document: &Value) -> Result<impl Iterator<Item = Result<Location>> + '_> {
    let items = top_level_array(document, Some("locations"), "an object with a `locations` array")?;
    Ok(items.iter().enumerate().map(|(index, point)| parse_location(&Element::new(index, point))))
}

fn parse_location(point: &Element<'_>) -> Result<Location> {
    let lng = point.required_i64("longitudeE7")? as f64 / E7_SCALE;
    let lat = point.required_i64("latitudeE7")? as f64 / E7_SCALE;
    let dt = point.epoch_timestamp_with("timestampMs", from_epoch_millis, from_epoch_millis_string)?;

    Ok(Location { lng, lat, dt })
}
