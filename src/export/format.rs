use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The export schemas this crate can extract, one per record type.
///
/// The tag is chosen by the caller, typically from the file's location in the
/// archive via [`ExportFormat::from_path`]; documents are never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// My Activity, YouTube watch history and search history
    Activity,
    /// YouTube liked videos playlist
    LikedVideos,
    /// Google Play Store installs
    AppInstalls,
    /// Location History records
    LocationHistory,
    /// Chrome browser history
    ChromeHistory,
    /// Hangouts messages (opt-in only)
    Hangouts,
}

/// Path suffixes of the standard Takeout layout, checked in order
const PATH_PATTERNS: &[(&str, ExportFormat)] = &[
    ("/history/watch-history.json", ExportFormat::Activity),
    ("/history/search-history.json", ExportFormat::Activity),
    ("/MyActivity.json", ExportFormat::Activity),
    ("/playlists/likes.json", ExportFormat::LikedVideos),
    ("Google Play Store/Installs.json", ExportFormat::AppInstalls),
    ("Location History/Location History.json", ExportFormat::LocationHistory),
    ("Location History/Records.json", ExportFormat::LocationHistory),
    ("Chrome/BrowserHistory.json", ExportFormat::ChromeHistory),
];

const YOUTUBE_ROOTS: &[&str] = &["YouTube and YouTube Music/", "YouTube/"];

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Activity,
        ExportFormat::LikedVideos,
        ExportFormat::AppInstalls,
        ExportFormat::LocationHistory,
        ExportFormat::ChromeHistory,
        ExportFormat::Hangouts,
    ];

    /// Recognize a default-extraction format from a file's path inside an archive.
    ///
    /// Separators are normalised so Windows paths match too. Hangouts is never
    /// returned; it has to be requested by tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use takeout_parser::ExportFormat;
    ///
    /// let path = Path::new("Takeout/Chrome/BrowserHistory.json");
    /// assert_eq!(ExportFormat::from_path(path), Some(ExportFormat::ChromeHistory));
    /// assert_eq!(ExportFormat::from_path(Path::new("Takeout/Hangouts/Hangouts.json")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        let normalized = format!("/{}", path.to_string_lossy().replace('\\', "/"));

        PATH_PATTERNS
            .iter()
            .filter(|(suffix, _)| normalized.ends_with(suffix))
            .map(|(_, format)| *format)
            .find(|format| match format {
                // YouTube history and likes live under a YouTube root
                ExportFormat::LikedVideos => YOUTUBE_ROOTS.iter().any(|root| normalized.contains(root)),
                ExportFormat::Activity if !normalized.ends_with("/MyActivity.json") => {
                    YOUTUBE_ROOTS.iter().any(|root| normalized.contains(root))
                }
                _ => true,
            })
    }

    /// Whether the format belongs to default batch extraction
    pub fn is_default(self) -> bool {
        self != ExportFormat::Hangouts
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Activity => "activity",
            ExportFormat::LikedVideos => "liked-videos",
            ExportFormat::AppInstalls => "app-installs",
            ExportFormat::LocationHistory => "location-history",
            ExportFormat::ChromeHistory => "chrome-history",
            ExportFormat::Hangouts => "hangouts",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
