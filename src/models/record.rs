use serde::{Deserialize, Serialize};

use crate::export::ExportFormat;
use crate::models::{
    Activity, ChromeHistory, HangoutsMessage, LikedYoutubeVideo, Location, PlayStoreAppInstall,
};
use crate::parsers::timestamps::Timestamp;

/// Any canonical record, tagged by the export it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Activity(Activity),
    LikedVideo(LikedYoutubeVideo),
    AppInstall(PlayStoreAppInstall),
    Location(Location),
    ChromeHistory(ChromeHistory),
    HangoutsMessage(HangoutsMessage),
}

impl Record {
    /// The instant the record describes
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Record::Activity(a) => a.time,
            Record::LikedVideo(v) => v.dt,
            Record::AppInstall(i) => i.dt,
            Record::Location(l) => l.dt,
            Record::ChromeHistory(h) => h.dt,
            Record::HangoutsMessage(m) => m.dt,
        }
    }

    pub fn format(&self) -> ExportFormat {
        match self {
            Record::Activity(_) => ExportFormat::Activity,
            Record::LikedVideo(_) => ExportFormat::LikedVideos,
            Record::AppInstall(_) => ExportFormat::AppInstalls,
            Record::Location(_) => ExportFormat::LocationHistory,
            Record::ChromeHistory(_) => ExportFormat::ChromeHistory,
            Record::HangoutsMessage(_) => ExportFormat::Hangouts,
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Record {
                fn from(value: $ty) -> Self {
                    Record::$variant(value)
                }
            }
        )*
    };
}

impl_from_record!(
    Activity(Activity),
    LikedVideo(LikedYoutubeVideo),
    AppInstall(PlayStoreAppInstall),
    Location(Location),
    ChromeHistory(ChromeHistory),
    HangoutsMessage(HangoutsMessage),
);
