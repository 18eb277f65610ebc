use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::export::format::ExportFormat;
use crate::models::Record;
use crate::parsers::{
    parse_activities, parse_app_installs, parse_chrome_history, parse_hangouts, parse_liked_videos,
    parse_locations,
};

/// A loaded export file: its path, its format tag and the parsed JSON document.
///
/// The file is read completely and closed before parsing; extraction then works
/// on the in-memory document, so [`ExportFile::records`] can be called any number
/// of times and always starts from the first element.
#[derive(Debug, Clone)]
pub struct ExportFile {
    path: PathBuf,
    format: ExportFormat,
    document: Value,
}

impl ExportFile {
    /// Read and parse `path` as an export of the given format.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read, [`Error::MalformedJson`] if its
    /// content is not JSON. Neither is retried.
    pub fn open(path: impl AsRef<Path>, format: ExportFormat) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        Self::from_json(path, format, &text)
    }

    /// Parse already-loaded content; `path` is kept only to attribute errors
    pub fn from_json(path: impl Into<PathBuf>, format: ExportFormat, text: &str) -> Result<Self> {
        let path = path.into();
        let document = serde_json::from_str::<Value>(text)
            .map_err(|source| Error::MalformedJson { path: path.clone(), source })?;

        tracing::debug!(path = %path.display(), bytes = text.len(), %format, "loaded export file");
        Ok(Self { path, format, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Lazily extract records with the extractor matching this file's format.
    ///
    /// A document of the wrong shape fails here; element errors are yielded by
    /// the iterator, wrapped with this file's path.
    pub fn records(&self) -> Result<Records<'_>> {
        let inner = match self.format {
            ExportFormat::Activity => boxed(parse_activities(&self.document)),
            ExportFormat::LikedVideos => boxed(parse_liked_videos(&self.document)),
            ExportFormat::AppInstalls => boxed(parse_app_installs(&self.document)),
            ExportFormat::LocationHistory => boxed(parse_locations(&self.document)),
            ExportFormat::ChromeHistory => boxed(parse_chrome_history(&self.document)),
            ExportFormat::Hangouts => boxed(parse_hangouts(&self.document)),
        }
        .map_err(|e| e.in_file(&self.path))?;

        Ok(Records { path: &self.path, inner })
    }
}

type RecordIter<'a> = Box<dyn Iterator<Item = Result<Record>> + 'a>;

fn boxed<'a, T, I>(extracted: Result<I>) -> Result<RecordIter<'a>>
where
    T: Into<Record>,
    I: Iterator<Item = Result<T>> + 'a,
{
    Ok(Box::new(extracted?.map(|item| item.map(Into::into))))
}

/// Iterator returned by [`ExportFile::records`]
pub struct Records<'a> {
    path: &'a Path,
    inner: RecordIter<'a>,
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| item.map_err(|e| e.in_file(self.path)))
    }
}

/// Load `path` and extract every record, stopping at the first error
///
/// # Examples
///
/// ```no_run
/// use takeout_parser::{ExportFormat, parse_file};
///
/// let records = parse_file("Takeout/Chrome/BrowserHistory.json", ExportFormat::ChromeHistory)?;
/// println!("{} visits", records.len());
/// # Ok::<(), takeout_parser::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>, format: ExportFormat) -> Result<Vec<Record>> {
    let file = ExportFile::open(path, format)?;
    file.records()?.collect()
}
