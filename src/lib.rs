//! Takeout Parser - typed records from Google Takeout JSON exports
//!
//! This library turns the JSON files of a Google Takeout archive into normalized,
//! strongly-typed records. It supports:
//!
//! - My Activity and YouTube watch/search history ([`Activity`])
//! - YouTube liked videos ([`LikedYoutubeVideo`])
//! - Google Play Store installs ([`PlayStoreAppInstall`])
//! - Location History ([`Location`])
//! - Chrome browser history ([`ChromeHistory`])
//! - Hangouts messages ([`HangoutsMessage`], opt-in)
//!
//! Every time field is decoded into one UTC [`Timestamp`], whether the export stored
//! an ISO-8601 string, epoch milliseconds or epoch microseconds.
//!
//! # Example
//!
//! ```no_run
//! use takeout_parser::{ExportFile, ExportFormat};
//!
//! let file = ExportFile::open(
//!     "Takeout/My Activity/YouTube/MyActivity.json",
//!     ExportFormat::Activity,
//! )?;
//! for record in file.records()? {
//!     println!("{}", record?.timestamp());
//! }
//! # Ok::<(), takeout_parser::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod models;
pub mod parsers;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
pub use export::{ExportFile, ExportFormat, parse_file};
pub use models::{
    Activity, ChromeHistory, Details, HangoutsMessage, LikedYoutubeVideo, Location, LocationInfo,
    PlayStoreAppInstall, Record, Subtitles,
};
pub use parsers::timestamps::{
    Timestamp, TimestampError, from_epoch_micros, from_epoch_millis_string, from_iso_string,
};
