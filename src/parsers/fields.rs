//! Field access over one parsed export element.
//!
//! Required lookups fail with an error naming the element index and the dotted
//! field path; optional lookups treat an absent key and JSON `null` alike.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::parsers::timestamps::{Timestamp, TimestampError};

const EMPTY: &[Value] = &[];

/// One element of an export document, remembered together with where it came from
#[derive(Debug, Clone)]
pub(crate) struct Element<'a> {
    index: usize,
    prefix: String,
    value: &'a Value,
}

impl<'a> Element<'a> {
    pub(crate) fn new(index: usize, value: &'a Value) -> Self {
        Self { index, prefix: String::new(), value }
    }

    /// A nested element sharing the parent's index; field names get `prefix` prepended
    pub(crate) fn nested(&self, prefix: impl AsRef<str>, value: &'a Value) -> Self {
        Self { index: self.index, prefix: format!("{}{}", self.prefix, prefix.as_ref()), value }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    fn lookup(&self, path: &str) -> Option<&'a Value> {
        path.split('.')
            .try_fold(self.value, |value, key| value.get(key))
            .filter(|value| !value.is_null())
    }

    fn qualified(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }

    pub(crate) fn missing(&self, path: &str) -> Error {
        Error::MissingField { index: self.index, field: self.qualified(path) }
    }

    fn invalid(&self, path: &str, expected: &'static str) -> Error {
        Error::InvalidField { index: self.index, field: self.qualified(path), expected }
    }

    pub(crate) fn bad_timestamp(&self, path: &str, source: TimestampError) -> Error {
        Error::MalformedTimestamp { index: self.index, field: self.qualified(path), source }
    }

    pub(crate) fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    pub(crate) fn required_str(&self, path: &str) -> Result<&'a str> {
        self.optional_str(path)?.ok_or_else(|| self.missing(path))
    }

    pub(crate) fn optional_str(&self, path: &str) -> Result<Option<&'a str>> {
        match self.lookup(path) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.invalid(path, "a string")),
        }
    }

    pub(crate) fn required_i64(&self, path: &str) -> Result<i64> {
        match self.lookup(path) {
            None => Err(self.missing(path)),
            Some(value) => value.as_i64().ok_or_else(|| self.invalid(path, "an integer")),
        }
    }

    /// Array under `path`, empty when the key is absent
    pub(crate) fn array_or_empty(&self, path: &str) -> Result<&'a [Value]> {
        match self.lookup(path) {
            None => Ok(EMPTY),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.invalid(path, "an array")),
        }
    }

    pub(crate) fn required_array(&self, path: &str) -> Result<&'a [Value]> {
        match self.lookup(path) {
            None => Err(self.missing(path)),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.invalid(path, "an array")),
        }
    }

    /// String-valued timestamp decoded with `decode`; absence is a `MissingField`
    pub(crate) fn timestamp_with(
        &self,
        path: &str,
        decode: fn(&str) -> std::result::Result<Timestamp, TimestampError>,
    ) -> Result<Timestamp> {
        let raw = self.required_str(path)?;
        decode(raw).map_err(|e| self.bad_timestamp(path, e))
    }

    /// Like [`Element::timestamp_with`], but an absent or non-string value is
    /// reported as a malformed timestamp instead of a missing field
    pub(crate) fn strict_timestamp_with(
        &self,
        path: &str,
        decode: fn(&str) -> std::result::Result<Timestamp, TimestampError>,
    ) -> Result<Timestamp> {
        match self.lookup(path) {
            None => Err(self.bad_timestamp(path, TimestampError::Missing)),
            Some(Value::String(raw)) => decode(raw).map_err(|e| self.bad_timestamp(path, e)),
            Some(other) => Err(self.bad_timestamp(
                path,
                TimestampError::WrongType { expected: "a string", found: json_type_name(other) },
            )),
        }
    }

    /// Epoch count stored either as a JSON integer or as a string of digits
    pub(crate) fn epoch_timestamp_with(
        &self,
        path: &str,
        from_int: fn(i64) -> std::result::Result<Timestamp, TimestampError>,
        from_str: fn(&str) -> std::result::Result<Timestamp, TimestampError>,
    ) -> Result<Timestamp> {
        let decoded = match self.lookup(path) {
            None => return Err(self.missing(path)),
            Some(Value::String(raw)) => from_str(raw),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(n) => from_int(n),
                None => Err(TimestampError::NotAnInteger { value: n.to_string() }),
            },
            Some(other) => Err(TimestampError::WrongType {
                expected: "an integer or a string of digits",
                found: json_type_name(other),
            }),
        };
        decoded.map_err(|e| self.bad_timestamp(path, e))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Top-level array of a document, or the array stored under `key`
pub(crate) fn top_level_array<'a>(
    document: &'a Value,
    key: Option<&str>,
    expected: &'static str,
) -> Result<&'a [Value]> {
    let target = match key {
        Some(key) => document.get(key),
        None => Some(document),
    };
    match target {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        _ => Err(Error::UnexpectedShape { expected }),
    }
}
