use log::debug;

use crate::resolver::{CaptionFormat, CaptionResolver, CaptionTrack, FORMAT_PRIORITY, TimedTextQuery};
use crate::video_id::VideoId;

// @module: Fetching captions for a single track

/// Parameter set fetching one track, optionally machine-translated
///
/// `kind=asr` and `name` are mutually exclusive: ASR tracks never carry a
/// name on the endpoint side.
pub fn track_query(video_id: &VideoId, track: &CaptionTrack, translate_to: Option<&str>) -> TimedTextQuery {
    let query = TimedTextQuery::captions(video_id.as_str()).param("lang", &track.language_code);

    let query = if track.is_auto_generated() {
        query.param("kind", "asr")
    } else {
        query.opt_param("name", track.name.as_deref())
    };

    query.translate_to(translate_to)
}

impl CaptionResolver {
    /// Perform a single attempt in one format
    ///
    /// Transport errors, non-success statuses and unparseable bodies all
    /// come back as `None`.
    pub async fn fetch_format(&self, query: &TimedTextQuery, format: CaptionFormat) -> Option<String> {
        let query = query.with_format(format);

        match self.source.fetch_text(&query).await {
            Ok(body) => {
                let text = format.parse(&body);
                if text.is_none() {
                    debug!("No {} captions in response to {}", format, query);
                }
                text
            }
            Err(e) => {
                debug!("{} attempt failed for {}: {}", format, query, e);
                None
            }
        }
    }

    /// Fetch a track, trying every format in priority order
    pub async fn fetch_using_track(
        &self,
        video_id: &VideoId,
        track: &CaptionTrack,
        translate_to: Option<&str>,
    ) -> Option<String> {
        let query = track_query(video_id, track, translate_to);

        for format in FORMAT_PRIORITY {
            if let Some(text) = self.fetch_format(&query, format).await {
                return Some(text);
            }
        }

        None
    }
}
