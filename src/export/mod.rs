//! Loading export files and dispatching them to the matching extractor.
//!
//! - [`ExportFormat`] - closed set of format tags, with Takeout path recognition
//! - [`ExportFile`] - one loaded document plus its tag; yields [`Record`](crate::Record)s
//! - [`collect`] - strict and lenient policies for element errors

pub mod collect;
pub mod file;
pub mod format;

pub use collect::{CollectStats, collect_lenient, collect_strict};
pub use file::{ExportFile, Records, parse_file};
pub use format::ExportFormat;
