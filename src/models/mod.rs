//! Canonical record types produced by the extractors.
//!
//! - [`Activity`] (with [`Subtitles`], [`Details`], [`LocationInfo`]) - My Activity and
//!   YouTube history entries
//! - [`LikedYoutubeVideo`], [`PlayStoreAppInstall`], [`Location`], [`ChromeHistory`],
//!   [`HangoutsMessage`] - one per remaining export
//! - [`Record`] - sum type over all of the above
//!
//! Records are plain values: built once by an extractor, then owned by the caller.
//! Every time field is a [`Timestamp`](crate::Timestamp) in UTC.

pub mod activity;
pub mod record;
pub mod records;

pub use activity::{Activity, Details, LocationInfo, Subtitles};
pub use record::Record;
pub use records::{ChromeHistory, HangoutsMessage, LikedYoutubeVideo, Location, PlayStoreAppInstall};
