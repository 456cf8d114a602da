/*!
 * Tests for the caption payload parsers
 */

use ytcaptions::caption_parser::{collapse_whitespace, parse_json3, parse_timed_xml, parse_webvtt};
use ytcaptions::resolver::CaptionFormat;

use crate::common::{json3_body, timed_xml_body, vtt_body};

#[test]
fn test_collapseWhitespace_withRunsOfWhitespace_shouldCollapseAndTrim() {
    assert_eq!(collapse_whitespace("  Hello \n\t world  "), "Hello world");
    assert_eq!(collapse_whitespace(" \n "), "");
    assert_eq!(collapse_whitespace("one"), "one");
}

#[test]
fn test_parseJson3_withSegments_shouldJoinAndCollapse() {
    let body = r#"{"events":[{"segs":[{"utf8":"Hello"},{"utf8":" world"}]}]}"#;
    assert_eq!(parse_json3(body).as_deref(), Some("Hello world"));
}

#[test]
fn test_parseJson3_withEventsWithoutSegments_shouldSkipThem() {
    let body = r#"{"events":[{"tStartMs":0},{"segs":[{"utf8":"kept"}]},{"segs":"nope"}]}"#;
    assert_eq!(parse_json3(body).as_deref(), Some("kept"));
}

#[test]
fn test_parseJson3_withNewlineSegments_shouldCollapseToSpaces() {
    let body = json3_body(&["first line", "\n", "second\nline"]);
    assert_eq!(parse_json3(&body).as_deref(), Some("first line second line"));
}

#[test]
fn test_parseJson3_withInvalidBodies_shouldReturnNone() {
    assert_eq!(parse_json3(""), None);
    assert_eq!(parse_json3("  <html>error</html>"), None);
    assert_eq!(parse_json3("{not json"), None);
    assert_eq!(parse_json3(r#"{"wireMagic":"pb3"}"#), None);
    assert_eq!(parse_json3(r#"{"events":{}}"#), None);
    assert_eq!(parse_json3(r#"{"events":[]}"#), None);
    assert_eq!(parse_json3(r#"{"events":[{"segs":[{"utf8":"\n"}]}]}"#), None);
}

#[test]
fn test_parseTimedXml_withEscapedText_shouldDecodeEntities() {
    let body = r#"<transcript><text start="0">Hello &amp; world</text></transcript>"#;
    assert_eq!(parse_timed_xml(body).as_deref(), Some("Hello & world"));
}

#[test]
fn test_parseTimedXml_withMultilineElements_shouldJoinFragments() {
    let body = timed_xml_body(&["it&amp;#39;s\nfine", "&quot;really&quot;", "  "]);
    assert_eq!(parse_timed_xml(&body).as_deref(), Some("it's fine \"really\""));
}

#[test]
fn test_parseTimedXml_withInvalidBodies_shouldReturnNone() {
    assert_eq!(parse_timed_xml(""), None);
    assert_eq!(parse_timed_xml("<text>orphan</text>"), None);
    assert_eq!(parse_timed_xml("<transcript></transcript>"), None);
    assert_eq!(parse_timed_xml(r#"{"events":[]}"#), None);
}

#[test]
fn test_parseWebvtt_withCueIndexAfterTiming_shouldStripIt() {
    let body = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\n1\nHello world\n";
    assert_eq!(parse_webvtt(body).as_deref(), Some("Hello world"));
}

#[test]
fn test_parseWebvtt_withStylingTags_shouldStripTags() {
    let body = "WEBVTT\nKind: captions\nLanguage: en\n\n\
                00:00:00.000 --> 00:00:02.000 align:start position:0%\n\
                <c.colorE5E5E5>Hello</c> <c>there</c>\n";
    assert_eq!(
        parse_webvtt(body).as_deref(),
        Some("Kind: captions Language: en Hello there")
    );
}

#[test]
fn test_parseWebvtt_withNumberedCues_shouldKeepOnlyText() {
    let body = vtt_body(&["one", "two", "three"]);
    assert_eq!(parse_webvtt(&body).as_deref(), Some("one two three"));
}

#[test]
fn test_parseWebvtt_withInvalidBodies_shouldReturnNone() {
    assert_eq!(parse_webvtt(""), None);
    assert_eq!(parse_webvtt("00:00:00.000 --> 00:00:01.000\nno header"), None);
    assert_eq!(parse_webvtt("WEBVTT\n"), None);
}

#[test]
fn test_captionFormat_parse_shouldDispatchToMatchingParser() {
    let json = json3_body(&["json"]);
    let xml = timed_xml_body(&["xml"]);
    let vtt = vtt_body(&["vtt"]);

    assert_eq!(CaptionFormat::Json3.parse(&json).as_deref(), Some("json"));
    assert_eq!(CaptionFormat::Xml.parse(&xml).as_deref(), Some("xml"));
    assert_eq!(CaptionFormat::Vtt.parse(&vtt).as_deref(), Some("vtt"));

    // Each parser rejects the other formats
    assert_eq!(CaptionFormat::Json3.parse(&xml), None);
    assert_eq!(CaptionFormat::Xml.parse(&vtt), None);
    assert_eq!(CaptionFormat::Vtt.parse(&json), None);
}

#[test]
fn test_parseJson3_withNonStringUtf8_shouldSkipSegment() {
    let body = r#"{"events":[{"segs":[{"utf8":1},{"utf8":"kept"}]}]}"#;
    assert_eq!(parse_json3(body).as_deref(), Some("kept"));
}

#[test]
fn test_parseWebvtt_withOnlyCueMarkup_shouldReturnNone() {
    assert_eq!(parse_webvtt("WEBVTT\n\n1\n00:00:00.000 --> 00:00:01.000\n"), None);
}

#[test]
fn test_parseWebvtt_withNonAsciiDigitLine_shouldKeepItAsText() {
    let body = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nالعدد\n٣\n";
    assert_eq!(parse_webvtt(body).as_deref(), Some("العدد ٣"));
}

#[test]
fn test_parseWebvtt_withNonAsciiDigitTiming_shouldKeepLine() {
    let body = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\n٠٠:٠٠:٠٠.٠٠٠ --> soon\n";
    assert_eq!(parse_webvtt(body).as_deref(), Some("٠٠:٠٠:٠٠.٠٠٠ --> soon"));
}
