use serde::{Deserialize, Serialize};

use crate::parsers::timestamps::Timestamp;

/// One entry of a "My Activity" export (also YouTube watch and search history)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub header: String,
    pub title: String,
    pub title_url: Option<String>,
    pub description: Option<String>,
    pub time: Timestamp,
    pub subtitles: Vec<Subtitles>,
    pub details: Vec<Details>,
    pub location_infos: Vec<LocationInfo>,
    pub products: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtitles {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    pub name: String,
}

/// Location attached to an activity. Exports disagree on which keys appear,
/// so every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub name: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
}
