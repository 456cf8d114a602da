/*!
 * Tests for track scoring and ordering
 */

use ytcaptions::resolver::{CaptionTrack, score_track, sort_tracks};

#[test]
fn test_scoreTrack_withExactMatch_shouldAddAllComponents() {
    assert_eq!(score_track(&CaptionTrack::human("en"), "en"), 7);
    assert_eq!(score_track(&CaptionTrack::auto_generated("en"), "en"), 6);
    assert_eq!(score_track(&CaptionTrack::human("EN-us"), "en-US"), 7);
}

#[test]
fn test_scoreTrack_withSubtagMatch_shouldScoreTwo() {
    assert_eq!(score_track(&CaptionTrack::auto_generated("en-GB"), "en-US"), 2);
    assert_eq!(score_track(&CaptionTrack::human("en-GB"), "en"), 3);
}

#[test]
fn test_scoreTrack_withoutPreference_shouldOnlyRewardHumans() {
    assert_eq!(score_track(&CaptionTrack::human("en"), ""), 1);
    assert_eq!(score_track(&CaptionTrack::auto_generated("en"), ""), 0);
}

#[test]
fn test_scoreTrack_forSameKind_shouldBeMonotonicInMatchQuality() {
    let makers: [fn(&str) -> CaptionTrack; 2] = [|l| CaptionTrack::human(l), |l| CaptionTrack::auto_generated(l)];
    for track_for in makers {
        let exact = score_track(&track_for("pt-BR"), "pt-BR");
        let subtag_only = score_track(&track_for("pt-PT"), "pt-BR");
        let none = score_track(&track_for("es"), "pt-BR");

        assert!(exact >= subtag_only);
        assert!(subtag_only >= none);
    }
}

#[test]
fn test_sortTracks_withEnglishPreference_shouldRankHumanThenAsrThenOthers() {
    let mut tracks = vec![
        CaptionTrack::human("es"),
        CaptionTrack::auto_generated("en"),
        CaptionTrack::human("en"),
    ];
    sort_tracks(&mut tracks, "en");

    assert_eq!(
        tracks,
        vec![
            CaptionTrack::human("en"),
            CaptionTrack::auto_generated("en"),
            CaptionTrack::human("es"),
        ]
    );
}

#[test]
fn test_sortTracks_withTies_shouldKeepUpstreamOrder() {
    let mut tracks = vec![
        CaptionTrack::human("fr"),
        CaptionTrack::human("de"),
        CaptionTrack::auto_generated("it"),
        CaptionTrack::human("nl"),
    ];
    sort_tracks(&mut tracks, "ja");

    let order: Vec<&str> = tracks.iter().map(|t| t.language_code.as_str()).collect();
    assert_eq!(order, vec!["fr", "de", "nl", "it"]);
}
