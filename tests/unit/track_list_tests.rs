/*!
 * Tests for track list parsing
 */

use ytcaptions::resolver::{CaptionTrack, TrackKind, parse_track_list};

use crate::common::track_list_body;

#[test]
fn test_parseTrackList_withMixedTracks_shouldKeepUpstreamOrder() {
    let body = track_list_body(&[("es", "", "Spanish"), ("en", "asr", ""), ("en", "", "")]);
    let tracks = parse_track_list(&body);

    assert_eq!(
        tracks,
        vec![
            CaptionTrack::new("es", TrackKind::Human, Some("Spanish".to_string())),
            CaptionTrack::auto_generated("en"),
            CaptionTrack::human("en"),
        ]
    );
}

#[test]
fn test_parseTrackList_withEscapedName_shouldDecodeAttribute() {
    let body = track_list_body(&[("fr", "", "Fran&#231;ais &amp; co")]);
    let tracks = parse_track_list(&body);

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name.as_deref(), Some("Français & co"));
}

#[test]
fn test_parseTrackList_withNamedAsrTrack_shouldDropName() {
    let body = track_list_body(&[("de", "asr", "Deutsch (auto)")]);
    let tracks = parse_track_list(&body);

    assert_eq!(tracks, vec![CaptionTrack::auto_generated("de")]);
    assert!(tracks[0].is_auto_generated());
}

#[test]
fn test_parseTrackList_withoutListMarker_shouldReturnEmpty() {
    assert!(parse_track_list("").is_empty());
    assert!(parse_track_list(r#"<track lang_code="en"/>"#).is_empty());
    assert!(parse_track_list("<html>Not Found</html>").is_empty());
}

#[test]
fn test_parseTrackList_withEmptyList_shouldReturnEmpty() {
    let body = track_list_body(&[]);
    assert!(parse_track_list(&body).is_empty());
}

#[test]
fn test_trackKind_fromMarker_shouldOnlyRecognizeAsr() {
    assert_eq!(TrackKind::from_marker(Some("asr")), TrackKind::AutoGenerated);
    assert_eq!(TrackKind::from_marker(Some("forced")), TrackKind::Human);
    assert_eq!(TrackKind::from_marker(None), TrackKind::Human);
}

#[test]
fn test_captionTrack_serialize_shouldUseCamelCaseAndSkipMissingName() {
    let human = CaptionTrack::new("en", TrackKind::Human, Some("English".to_string()));
    let asr = CaptionTrack::auto_generated("en");

    assert_eq!(
        serde_json::to_value(&human).unwrap(),
        serde_json::json!({ "languageCode": "en", "kind": "human", "name": "English" })
    );
    assert_eq!(
        serde_json::to_value(&asr).unwrap(),
        serde_json::json!({ "languageCode": "en", "kind": "asr" })
    );
}
