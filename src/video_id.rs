use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use url::Url;

// @module: Video identifier extraction from URLs and raw input

static SHORTS_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/shorts/([A-Za-z0-9_-]{6,})").unwrap()
});

static LOOSE_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:v=|youtu\.be/|/shorts/)([A-Za-z0-9_-]{6,})").unwrap()
});

static BARE_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{6,}$").unwrap()
});

/// Opaque video identifier, passed verbatim as the `v` parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap an identifier; empty or blank input is not an identifier
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Accept either a URL or a bare identifier
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        extract_video_id(input).or_else(|| {
            if BARE_ID_REGEX.is_match(input) {
                Self::new(input)
            } else {
                None
            }
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract a video identifier from a watch, short-link or shorts URL
///
/// Inputs that do not parse as a URL are scanned for `v=`, `youtu.be/` or
/// `/shorts/` followed by an identifier-looking token.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    if let Ok(url) = Url::parse(input) {
        if let Some(id) = from_url(&url) {
            return Some(id);
        }
    }

    LOOSE_ID_REGEX
        .captures(input)
        .and_then(|caps| VideoId::new(&caps[1]))
}

fn from_url(url: &Url) -> Option<VideoId> {
    if url.host_str().is_some_and(|host| host.contains("youtu.be")) {
        let path = url.path().trim_start_matches('/');
        if !path.is_empty() {
            return VideoId::new(path);
        }
    }

    if let Some((_, v)) = url.query_pairs().find(|(key, _)| key == "v") {
        if let Some(id) = VideoId::new(v.into_owned()) {
            return Some(id);
        }
    }

    SHORTS_PATH_REGEX
        .captures(url.path())
        .and_then(|caps| VideoId::new(&caps[1]))
}
