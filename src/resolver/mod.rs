/*!
 * Caption resolution engine.
 *
 * Turns a video identifier into caption text against an endpoint with no
 * stable contract:
 * - `resolver::tracks`: lists the caption tracks a video advertises
 * - `resolver::scoring`: orders tracks by relevance to a language
 * - `resolver::fetcher`: fetches one track, trying json3, XML, then WebVTT
 * - `resolver::engine`: per-language resolution and the outer fallback loop
 * - `resolver::query`: parameter sets for the endpoint
 *
 * Every step reports failure as emptiness (`None`, an empty list), so the
 * cascade only ever branches on "did we get text".
 */

use serde::Serialize;
use std::sync::Arc;

use crate::app_config::ResolverConfig;
use crate::upstream::CaptionSource;

pub mod engine;
pub mod fetcher;
pub mod query;
pub mod scoring;
pub mod tracks;

pub use fetcher::track_query;
pub use query::{CaptionFormat, FORMAT_PRIORITY, TimedTextQuery};
pub use scoring::{score_track, sort_tracks};
pub use tracks::parse_track_list;

/// Authorship of a caption track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrackKind {
    /// Uploaded by a person
    #[serde(rename = "human")]
    Human,
    /// Speech recognition output (`kind="asr"`)
    #[serde(rename = "asr")]
    AutoGenerated,
}

impl TrackKind {
    /// Kind from the upstream `kind` attribute
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some("asr") => Self::AutoGenerated,
            _ => Self::Human,
        }
    }
}

/// One caption option advertised by the track list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub language_code: String,
    pub kind: TrackKind,
    /// Disambiguates tracks sharing a language; never set on ASR tracks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CaptionTrack {
    pub fn new(language_code: impl Into<String>, kind: TrackKind, name: Option<String>) -> Self {
        let name = match kind {
            TrackKind::AutoGenerated => None,
            TrackKind::Human => name.filter(|n| !n.is_empty()),
        };
        Self {
            language_code: language_code.into(),
            kind,
            name,
        }
    }

    pub fn human(language_code: impl Into<String>) -> Self {
        Self::new(language_code, TrackKind::Human, None)
    }

    pub fn auto_generated(language_code: impl Into<String>) -> Self {
        Self::new(language_code, TrackKind::AutoGenerated, None)
    }

    pub fn is_auto_generated(&self) -> bool {
        self.kind == TrackKind::AutoGenerated
    }
}

/// Outcome of resolving one video for one preferred language
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// Caption text; empty when nothing was found
    pub text: String,
    /// Tracks tried, in the order they were tried
    pub tracks_considered: Vec<CaptionTrack>,
}

impl ResolutionResult {
    pub fn is_found(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Outcome of the outer language fallback loop
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallbackResolution {
    /// Result of the last language attempted
    pub result: ResolutionResult,
    /// Languages attempted in order; `None` is the attempt without a language
    pub tested_languages: Vec<Option<String>>,
}

/// Caption resolver bound to a caption source
#[derive(Debug, Clone)]
pub struct CaptionResolver {
    // @field: Endpoint access
    source: Arc<dyn CaptionSource>,

    // @field: Languages tried after the caller's hint
    fallback_languages: Vec<String>,
}

impl CaptionResolver {
    /// Create a resolver with the configured fallback languages
    pub fn new(source: Arc<dyn CaptionSource>, config: &ResolverConfig) -> Self {
        Self::with_fallback_languages(source, config.fallback_languages.clone())
    }

    pub fn with_fallback_languages(source: Arc<dyn CaptionSource>, fallback_languages: Vec<String>) -> Self {
        Self {
            source,
            fallback_languages,
        }
    }
}
