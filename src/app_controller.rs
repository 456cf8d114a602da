use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::{AppError, ResolveError};
use crate::resolver::{CaptionResolver, CaptionTrack};
use crate::upstream::{CaptionSource, TimedTextClient};
use crate::video_id::{VideoId, extract_video_id};

// @module: Application controller for transcript requests

/// Transcript request as received from the HTTP query string or the CLI
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptRequest {
    /// Video URL to extract an identifier from
    pub url: Option<String>,
    /// Video identifier, takes precedence over `url`
    pub id: Option<String>,
    /// Preferred caption language
    pub lang: Option<String>,
    /// `1` enables diagnostic fields in the response
    pub debug: Option<String>,
}

impl TranscriptRequest {
    pub fn is_debug(&self) -> bool {
        self.debug.as_deref() == Some("1")
    }
}

/// JSON body of a transcript response
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    // @field: Debug only, tracks considered by the last resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<CaptionTrack>>,

    // @field: Debug only, languages attempted in order (null = no language)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tested_langs: Option<Vec<Option<String>>>,
}

/// Status code plus JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptResponse {
    pub status: u16,
    pub body: TranscriptBody,
}

impl TranscriptResponse {
    /// 200 response carrying caption text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: TranscriptBody {
                text: Some(text.into()),
                ..Default::default()
            },
        }
    }

    /// Error response with the status matching the error
    pub fn from_error(error: &ResolveError) -> Self {
        Self {
            status: error.status_code(),
            body: TranscriptBody {
                error: Some(error.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Main application controller
///
/// Owns the resolver and implements the caller-facing contract shared by
/// the HTTP server and the CLI.
#[derive(Debug, Clone)]
pub struct Controller {
    // @field: Resolver bound to the caption source
    resolver: CaptionResolver,
}

impl Controller {
    /// Create a controller talking to the real endpoint
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let client = TimedTextClient::new(&config.upstream)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a controller over any caption source
    pub fn with_source(config: Config, source: Arc<dyn CaptionSource>) -> Self {
        Self {
            resolver: CaptionResolver::new(source, &config.resolver),
        }
    }

    pub fn resolver(&self) -> &CaptionResolver {
        &self.resolver
    }

    /// Determine the video identifier of a request
    ///
    /// A non-empty `id` is used verbatim; otherwise it is extracted from
    /// `url`.
    pub fn identify(request: &TranscriptRequest) -> Result<VideoId, ResolveError> {
        if let Some(id) = request.id.as_deref().and_then(VideoId::new) {
            return Ok(id);
        }

        request
            .url
            .as_deref()
            .and_then(extract_video_id)
            .ok_or(ResolveError::NoIdentifier)
    }

    /// Handle a transcript request end to end
    ///
    /// Never fails: every outcome, including "nothing found", is a response.
    pub async fn handle(&self, request: TranscriptRequest) -> TranscriptResponse {
        let video_id = match Self::identify(&request) {
            Ok(video_id) => video_id,
            Err(e) => {
                debug!("Rejected request without identifier: {:?}", request);
                return TranscriptResponse::from_error(&e);
            }
        };

        info!("Resolving transcript for {} (lang: {:?})", video_id, request.lang);
        let resolution = self
            .resolver
            .resolve_with_fallbacks(&video_id, request.lang.as_deref())
            .await;

        let mut response = if resolution.result.is_found() {
            TranscriptResponse::text(resolution.result.text)
        } else {
            TranscriptResponse::from_error(&ResolveError::NoTranscriptFound)
        };

        if request.is_debug() {
            response.body.tracks = Some(resolution.result.tracks_considered);
            response.body.tested_langs = Some(resolution.tested_languages);
        }

        response
    }
}
