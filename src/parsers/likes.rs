//! YouTube `likes.json` playlist exports

use serde_json::Value;

use crate::error::Result;
use crate::models::LikedYoutubeVideo;
use crate::parsers::fields::{Element, top_level_array};
use crate::parsers::timestamps::from_iso_string;

/// Lazily extract [`LikedYoutubeVideo`] records.
///
/// Every element needs `snippet.title`, `snippet.description`,
/// `snippet.publishedAt` and `contentDetails.videoId`; the record's `link` is the
/// watch URL for that video id.
pub fn parse_liked_videos(
    document: &Value,
) -> Result<impl Iterator<Item = Result<LikedYoutubeVideo>> + '_> {
    let items = top_level_array(document, None, "a JSON array of liked videos")?;
    Ok(items.iter().enumerate().map(|(index, like)| parse_like(&Element::new(index, like))))
}

fn parse_like(like: &Element<'_>) -> Result<LikedYoutubeVideo> {
    let title = like.required_str("snippet.title")?.to_string();
    let desc = like.required_str("snippet.description")?.to_string();
    let video_id = like.required_str("contentDetails.videoId")?;
    let dt = like.timestamp_with("snippet.publishedAt", from_iso_string)?;

    Ok(LikedYoutubeVideo { title, desc, link: LikedYoutubeVideo::watch_url(video_id), dt })
}
