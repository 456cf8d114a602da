use log::{debug, info, warn};

use crate::language_utils::normalize_opt;
use crate::resolver::{
    CaptionResolver, CaptionTrack, FORMAT_PRIORITY, FallbackResolution, ResolutionResult, TimedTextQuery, sort_tracks,
};
use crate::video_id::VideoId;

// @module: Resolution engine and language fallback loop

impl CaptionResolver {
    /// Resolve captions for a video in a preferred language
    ///
    /// Order of attempts:
    /// 1. No tracks listed: blind fetches, with then without the language
    /// 2. Every track by descending score, untranslated
    /// 3. Every track again, machine-translated to the preferred language
    pub async fn resolve(&self, video_id: &VideoId, preferred_language: Option<&str>) -> ResolutionResult {
        let mut tracks = self.list_tracks(video_id).await;

        if tracks.is_empty() {
            debug!("No tracks listed for {}, trying blind fetches", video_id);
            let text = self.blind_fetch(video_id, preferred_language).await.unwrap_or_default();
            return ResolutionResult {
                text,
                tracks_considered: Vec::new(),
            };
        }

        let want = normalize_opt(preferred_language);
        sort_tracks(&mut tracks, &want);

        let mut text = self.first_track_text(video_id, &tracks, None).await;
        if text.is_none() && !want.is_empty() {
            text = self.first_track_text(video_id, &tracks, Some(&want)).await;
        }

        if text.is_none() {
            debug!("All {} track(s) of {} exhausted for language '{}'", tracks.len(), video_id, want);
        }

        ResolutionResult {
            text: text.unwrap_or_default(),
            tracks_considered: tracks,
        }
    }

    async fn first_track_text(
        &self,
        video_id: &VideoId,
        tracks: &[CaptionTrack],
        translate_to: Option<&str>,
    ) -> Option<String> {
        for track in tracks {
            if let Some(text) = self.fetch_using_track(video_id, track, translate_to).await {
                match translate_to {
                    Some(target) => info!("Captions for {} translated from {} to {}", video_id, track.language_code, target),
                    None => info!("Captions for {} from track {} ({:?})", video_id, track.language_code, track.kind),
                }
                return Some(text);
            }
        }
        None
    }

    // Used when the list endpoint advertises nothing; some videos still
    // serve captions to direct requests.
    async fn blind_fetch(&self, video_id: &VideoId, preferred_language: Option<&str>) -> Option<String> {
        let without_lang = TimedTextQuery::captions(video_id.as_str());
        let with_lang = without_lang.clone().lang(preferred_language);

        for format in FORMAT_PRIORITY {
            if with_lang != without_lang {
                if let Some(text) = self.fetch_format(&with_lang, format).await {
                    return Some(text);
                }
            }
            if let Some(text) = self.fetch_format(&without_lang, format).await {
                return Some(text);
            }
        }

        None
    }

    /// Languages tried for a caller hint, in order
    ///
    /// The hint comes first, then the configured fallbacks, then `None` for
    /// an attempt without any language. A candidate equal to an earlier one
    /// (ignoring case) is dropped.
    pub fn candidate_languages(&self, hint: Option<&str>) -> Vec<Option<String>> {
        let hint = hint.map(str::trim).filter(|h| !h.is_empty());
        let mut candidates: Vec<Option<String>> = Vec::new();

        for lang in hint.into_iter().chain(self.fallback_languages.iter().map(String::as_str)) {
            let already_listed = candidates
                .iter()
                .flatten()
                .any(|existing| existing.eq_ignore_ascii_case(lang));
            if !lang.is_empty() && !already_listed {
                candidates.push(Some(lang.to_string()));
            }
        }

        candidates.push(None);
        candidates
    }

    /// Resolve captions, falling back through the candidate languages
    ///
    /// Stops at the first language producing text.
    pub async fn resolve_with_fallbacks(&self, video_id: &VideoId, hint: Option<&str>) -> FallbackResolution {
        let mut tested_languages = Vec::new();
        let mut result = ResolutionResult::default();

        for candidate in self.candidate_languages(hint) {
            debug!("Resolving {} with language {:?}", video_id, candidate);
            result = self.resolve(video_id, candidate.as_deref()).await;
            tested_languages.push(candidate);

            if result.is_found() {
                break;
            }
        }

        if !result.is_found() {
            warn!("No transcript found for {} after {} language(s)", video_id, tested_languages.len());
        }

        FallbackResolution {
            result,
            tested_languages,
        }
    }
}
