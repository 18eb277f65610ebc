//! Hangouts `Hangouts.json`.
//!
//! Not part of default extraction: the message body comes from a last-segment-wins
//! scan, which loses text for multi-segment messages. Callers opt in by asking for
//! [`ExportFormat::Hangouts`](crate::ExportFormat::Hangouts) explicitly.

use std::iter::Enumerate;
use std::slice::Iter;

use serde_json::Value;

use crate::error::Result;
use crate::models::HangoutsMessage;
use crate::parsers::fields::{Element, top_level_array};
use crate::parsers::timestamps::{from_epoch_micros, from_epoch_micros_string};

const SEGMENT_TEXT: &str = "TEXT";
const SEGMENT_LINK: &str = "LINK";
const MESSAGE_CONTENT: &str = "chat_message.message_content";
const SEGMENTS: &str = "chat_message.message_content.segment";

/// Lazily extract [`HangoutsMessage`] records from every conversation's events.
///
/// Events without `chat_message.message_content` (membership changes, calls, ...)
/// or without a `segment` list are skipped. Within a message the last `TEXT`
/// segment supplies the body and the last `LINK` segment the link target.
///
/// Element errors are indexed by conversation, with the event position in the
/// field path (`events[3].timestamp`).
pub fn parse_hangouts(document: &Value) -> Result<HangoutsMessages<'_>> {
    let conversations =
        top_level_array(document, Some("conversations"), "an object with a `conversations` array")?;
    Ok(HangoutsMessages { conversations: conversations.iter().enumerate(), current: None })
}

/// Iterator returned by [`parse_hangouts`]
#[derive(Debug)]
pub struct HangoutsMessages<'a> {
    conversations: Enumerate<Iter<'a, Value>>,
    current: Option<(Element<'a>, Enumerate<Iter<'a, Value>>)>,
}

impl Iterator for HangoutsMessages<'_> {
    type Item = Result<HangoutsMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((conversation, events)) = &mut self.current {
                for (position, event) in events.by_ref() {
                    let event = conversation.nested(format!("events[{position}]."), event);
                    if let Some(item) = parse_event(&event).transpose() {
                        return Some(item);
                    }
                }
                self.current = None;
            }

            let (index, conversation) = self.conversations.next()?;
            let conversation = Element::new(index, conversation);
            match conversation.required_array("events") {
                Ok(events) => self.current = Some((conversation, events.iter().enumerate())),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

fn parse_event(event: &Element<'_>) -> Result<Option<HangoutsMessage>> {
    if !event.has(MESSAGE_CONTENT) {
        tracing::trace!(conversation = event.index(), "skipping non-message hangouts event");
        return Ok(None);
    }

    let dt = event.epoch_timestamp_with("timestamp", from_epoch_micros, from_epoch_micros_string)?;

    if !event.has(SEGMENTS) {
        return Ok(None);
    }

    let mut text = None;
    let mut link = None;
    for (i, segment) in event.required_array(SEGMENTS)?.iter().enumerate() {
        let segment = event.nested(format!("{SEGMENTS}[{i}]."), segment);
        match segment.required_str("type")? {
            SEGMENT_TEXT => text = Some(segment.required_str("text")?.to_string()),
            SEGMENT_LINK if segment.has("link_data") => {
                link = segment.optional_str("link_data.link_target")?.map(str::to_string);
            }
            _ => {}
        }
    }

    Ok(Some(HangoutsMessage { text, link, dt }))
}
