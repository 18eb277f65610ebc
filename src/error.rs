use std::path::PathBuf;

use thiserror::Error;

use crate::parsers::timestamps::TimestampError;

/// Errors produced while loading an export file or extracting its records.
///
/// `Io`, `MalformedJson` and `UnexpectedShape` are fatal for the whole file.
/// `MissingField`, `InvalidField` and `MalformedTimestamp` belong to exactly one
/// element and carry its index; iterating a loaded file wraps them in `File`.
/// The `TooMany*` variants come from lenient collection giving up on a file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected document shape: expected {expected}")]
    UnexpectedShape { expected: &'static str },

    #[error("element {index}: missing required field `{field}`")]
    MissingField { index: usize, field: String },

    #[error("element {index}: field `{field}` is not {expected}")]
    InvalidField { index: usize, field: String, expected: &'static str },

    #[error("element {index}: malformed timestamp in `{field}`: {source}")]
    MalformedTimestamp {
        index: usize,
        field: String,
        #[source]
        source: TimestampError,
    },

    #[error("too many failures: {failed} of {total} elements failed")]
    TooManyFailures { failed: usize, total: usize },

    #[error("too many consecutive failures ({count}); the file may be corrupted or of another format")]
    TooManyConsecutiveFailures { count: usize },

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

/// Flat classification of [`Error`], ignoring file wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    MalformedJson,
    UnexpectedShape,
    MissingField,
    InvalidField,
    MalformedTimestamp,
    TooManyFailures,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::MalformedJson { .. } => ErrorKind::MalformedJson,
            Error::UnexpectedShape { .. } => ErrorKind::UnexpectedShape,
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::InvalidField { .. } => ErrorKind::InvalidField,
            Error::MalformedTimestamp { .. } => ErrorKind::MalformedTimestamp,
            Error::TooManyFailures { .. } | Error::TooManyConsecutiveFailures { .. } => {
                ErrorKind::TooManyFailures
            }
            Error::File { source, .. } => source.kind(),
        }
    }

    /// Index of the offending element, for element-local errors
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::MissingField { index, .. }
            | Error::InvalidField { index, .. }
            | Error::MalformedTimestamp { index, .. } => Some(*index),
            Error::File { source, .. } => source.index(),
            _ => None,
        }
    }

    /// Dotted path of the offending field, for element-local errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingField { field, .. }
            | Error::InvalidField { field, .. }
            | Error::MalformedTimestamp { field, .. } => Some(field),
            Error::File { source, .. } => source.field(),
            _ => None,
        }
    }

    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            // already attributed
            Error::Io { .. } | Error::MalformedJson { .. } | Error::File { .. } => self,
            other => Error::File { path: path.into(), source: Box::new(other) },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
