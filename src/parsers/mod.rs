//! Extractors for Google Takeout JSON exports
//!
//! # Error Handling Strategy
//!
//! Extractors never decide whether a bad element should abort the file:
//!
//! - **Document shape**: A document that is not the shape an extractor needs (not an
//!   array, no `locations` key, ...) is rejected before any record is produced.
//!
//! - **Element failures**: A missing required key or an undecodable timestamp fails only
//!   that element. The error is yielded in place of the record, carrying the element
//!   index and the dotted field path, and iteration continues with the next element.
//!
//! - **Optional fields**: Absent optional keys (and JSON `null`) become `None` or an
//!   empty `Vec`. This is the only local recovery; required fields never fall back to
//!   a placeholder value.
//!
//! Whether to stop at the first element error or to skip and count is a caller policy;
//! see [`crate::export::collect`].

pub mod activity;
pub mod chrome;
pub(crate) mod fields;
pub mod hangouts;
pub mod installs;
pub mod likes;
pub mod location;
pub mod timestamps;

pub use activity::parse_activities;
pub use chrome::parse_chrome_history;
pub use hangouts::{HangoutsMessages, parse_hangouts};
pub use installs::parse_app_installs;
pub use likes::parse_liked_videos;
pub use location::parse_locations;
