use crate::language_utils::{normalize, same_primary_subtag};
use crate::resolver::CaptionTrack;

// @module: Track relevance scoring

const EXACT_MATCH_SCORE: u8 = 4;
const SUBTAG_MATCH_SCORE: u8 = 2;
const HUMAN_AUTHORED_SCORE: u8 = 1;

/// Relevance of a track for a preferred language
///
/// The components add up: an exact match also matches on the primary
/// subtag, so `en` against `en` scores 4 + 2, plus 1 if human-authored.
/// An empty preference only rewards human authorship.
pub fn score_track(track: &CaptionTrack, preferred_language: &str) -> u8 {
    let want = normalize(preferred_language);
    let have = normalize(&track.language_code);
    let mut score = 0;

    if !want.is_empty() && have == want {
        score += EXACT_MATCH_SCORE;
    }
    if same_primary_subtag(&want, &have) {
        score += SUBTAG_MATCH_SCORE;
    }
    if !track.is_auto_generated() {
        score += HUMAN_AUTHORED_SCORE;
    }

    score
}

/// Sort tracks by descending score
///
/// The sort is stable: ties keep upstream order, which tends to reflect
/// relevance already.
pub fn sort_tracks(tracks: &mut [CaptionTrack], preferred_language: &str) {
    tracks.sort_by_key(|track| std::cmp::Reverse(score_track(track, preferred_language)));
}
