use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::entities::decode_entities;
use crate::resolver::{CaptionResolver, CaptionTrack, TimedTextQuery, TrackKind};
use crate::video_id::VideoId;

// @module: Caption track listing

// @const: Self-closing <track .../> element
static TRACK_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<track\b([^>]*)/>").unwrap()
});

// @const: key="value" attribute
static ATTRIBUTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\w+)="([^"]*)""#).unwrap()
});

/// Parse a `type=list` response into tracks, keeping upstream order
///
/// Bodies without a `<transcript_list` marker yield no tracks.
pub fn parse_track_list(xml: &str) -> Vec<CaptionTrack> {
    if xml.is_empty() || !xml.contains("<transcript_list") {
        return Vec::new();
    }

    TRACK_TAG_REGEX
        .captures_iter(xml)
        .map(|tag| {
            let attributes: HashMap<&str, String> = ATTRIBUTE_REGEX
                .captures_iter(tag.get(1).map_or("", |m| m.as_str()))
                .filter_map(|attr| {
                    let key = attr.get(1)?.as_str();
                    let value = attr.get(2)?.as_str();
                    Some((key, decode_entities(value)))
                })
                .collect();

            CaptionTrack::new(
                attributes.get("lang_code").cloned().unwrap_or_default(),
                TrackKind::from_marker(attributes.get("kind").map(String::as_str)),
                attributes.get("name").cloned(),
            )
        })
        .collect()
}

impl CaptionResolver {
    /// List the caption tracks advertised for a video
    ///
    /// Transport failures produce an empty list; the engine falls back to
    /// blind fetches in that case.
    pub async fn list_tracks(&self, video_id: &VideoId) -> Vec<CaptionTrack> {
        let query = TimedTextQuery::list(video_id.as_str());

        match self.source.fetch_text(&query).await {
            Ok(body) => {
                let tracks = parse_track_list(&body);
                debug!("Track list for {}: {} track(s)", video_id, tracks.len());
                tracks
            }
            Err(e) => {
                debug!("Track list for {} unavailable: {}", video_id, e);
                Vec::new()
            }
        }
    }
}
