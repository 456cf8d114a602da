/*!
 * Parsers for the three caption payload formats served by the endpoint.
 *
 * Each parser takes the raw body of a single call and returns the caption
 * text as one whitespace-collapsed line, or `None` when the body is empty,
 * malformed, or simply not the format asked for. Parsers never fail: the
 * fetcher moves on to the next format instead.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::entities::decode_entities;

// @const: Body of every <text> element in a timed-XML transcript
static XML_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<text[^>]*>(.*?)</text>").unwrap()
});

// @const: WebVTT header line
static VTT_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^WEBVTT.*$").unwrap()
});

// @const: Cue timing line, e.g. "00:00:01.000 --> 00:00:03.500 align:start"
static VTT_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3} --> .*$").unwrap()
});

// @const: Line holding only a cue index
static VTT_CUE_INDEX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*[0-9]+\s*$").unwrap()
});

// @const: Inline class tags, <c>, <c.colorE5E5E5>, </c>
static VTT_STYLE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?c[.\w-]*>").unwrap()
});

/// Collapse every run of whitespace into a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Parse a `fmt=json3` payload: `{ "events": [ { "segs": [ { "utf8": ... } ] } ] }`
pub fn parse_json3(body: &str) -> Option<String> {
    // An XML body here is an error page, not captions
    if body.is_empty() || body.trim_start().starts_with('<') {
        return None;
    }

    let payload: Value = serde_json::from_str(body).ok()?;
    let events = payload.get("events")?.as_array()?;

    let mut parts: Vec<&str> = Vec::new();
    for event in events {
        let Some(segments) = event.get("segs").and_then(Value::as_array) else {
            continue;
        };
        parts.extend(
            segments
                .iter()
                .filter_map(|segment| segment.get("utf8").and_then(Value::as_str)),
        );
    }

    non_empty(collapse_whitespace(&parts.join(" ")))
}

/// Parse a timed-XML payload (`<transcript><text start=.. dur=..>..</text></transcript>`)
pub fn parse_timed_xml(body: &str) -> Option<String> {
    if body.is_empty() || !body.contains("<transcript") {
        return None;
    }

    let fragments: Vec<String> = XML_TEXT_REGEX
        .captures_iter(body)
        .map(|caps| decode_entities(&caps[1]))
        .collect();

    non_empty(collapse_whitespace(&fragments.join(" ")))
}

/// Parse a `fmt=vtt` payload
pub fn parse_webvtt(body: &str) -> Option<String> {
    if body.is_empty() || !body.contains("WEBVTT") {
        return None;
    }

    let text = VTT_HEADER_REGEX.replace(body, "");
    let text = VTT_TIMING_REGEX.replace_all(&text, "");
    let text = VTT_CUE_INDEX_REGEX.replace_all(&text, "");
    let text = VTT_STYLE_TAG_REGEX.replace_all(&text, "");

    non_empty(collapse_whitespace(&text))
}

