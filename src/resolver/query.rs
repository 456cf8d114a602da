/*!
 * Parameter sets for the timed-text endpoint.
 *
 * Every logical operation (list, fetch as json3/xml/vtt) is reached by a
 * combination of query parameters on a single base path.
 */

use std::fmt;
use url::form_urlencoded;

use crate::caption_parser;

/// Payload format requested from the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionFormat {
    /// `fmt=json3`
    Json3,
    /// No `fmt` parameter, timed-XML
    Xml,
    /// `fmt=vtt`
    Vtt,
}

/// Formats in the order they are tried for every track
///
/// json3 is the cheapest to parse and the most reliable, XML is a dependable
/// second source and WebVTT is the least structured.
pub const FORMAT_PRIORITY: [CaptionFormat; 3] =
    [CaptionFormat::Json3, CaptionFormat::Xml, CaptionFormat::Vtt];

impl CaptionFormat {
    /// Value of the `fmt` parameter, if any
    pub fn fmt_param(&self) -> Option<&'static str> {
        match self {
            Self::Json3 => Some("json3"),
            Self::Xml => None,
            Self::Vtt => Some("vtt"),
        }
    }

    /// Parse a response body in this format
    pub fn parse(&self, body: &str) -> Option<String> {
        match self {
            Self::Json3 => caption_parser::parse_json3(body),
            Self::Xml => caption_parser::parse_timed_xml(body),
            Self::Vtt => caption_parser::parse_webvtt(body),
        }
    }
}

impl fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json3 => write!(f, "json3"),
            Self::Xml => write!(f, "xml"),
            Self::Vtt => write!(f, "vtt"),
        }
    }
}

/// Ordered query parameters for one endpoint call
///
/// Parameters with empty values are never added, so an absent language and
/// an empty one produce the same request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimedTextQuery {
    params: Vec<(&'static str, String)>,
}

impl TimedTextQuery {
    /// Query listing the caption tracks of a video
    pub fn list(video_id: &str) -> Self {
        Self::default().param("type", "list").param("v", video_id)
    }

    /// Base query fetching captions of a video
    pub fn captions(video_id: &str) -> Self {
        Self::default().param("v", video_id)
    }

    /// Add a parameter, skipping empty values
    pub fn param(mut self, key: &'static str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if !value.is_empty() {
            self.params.push((key, value.to_string()));
        }
        self
    }

    /// Add an optional parameter
    pub fn opt_param(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Caption language (`lang`)
    pub fn lang(self, lang: Option<&str>) -> Self {
        self.opt_param("lang", lang)
    }

    /// Machine-translation target (`tlang`)
    pub fn translate_to(self, tlang: Option<&str>) -> Self {
        self.opt_param("tlang", tlang)
    }

    /// Copy of this query asking for the given payload format
    pub fn with_format(&self, format: CaptionFormat) -> Self {
        self.clone().opt_param("fmt", format.fmt_param())
    }

    /// Value of a parameter, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// URL-encoded query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl fmt::Display for TimedTextQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
