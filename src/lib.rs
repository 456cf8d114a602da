/*!
 * # ytcaptions - plain-text captions from YouTube's timed-text endpoint
 *
 * A Rust library and CLI that resolves a video identifier into plain-text
 * captions, negotiating with an undocumented endpoint whose tracks, formats
 * and languages vary per video.
 *
 * ## Features
 *
 * - Track discovery and relevance scoring by preferred language
 * - Three payload formats tried in order: json3, timed-XML, WebVTT
 * - Machine-translation fallback when no native track matches
 * - Blind fetches when the track list is empty
 * - Language fallback loop (hint, `en`, `en-US`, `en-GB`, none)
 * - HTTP server and CLI front ends
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `resolver`: The caption resolution engine:
 *   - `resolver::tracks`: Track listing
 *   - `resolver::scoring`: Track ordering
 *   - `resolver::fetcher`: Per-track format cascade
 *   - `resolver::engine`: Resolution and language fallbacks
 * - `caption_parser`: json3, timed-XML and WebVTT parsers
 * - `entities`: Character reference decoding
 * - `language_utils`: Language tag utilities
 * - `upstream`: Caption sources (HTTP client and mock)
 * - `video_id`: Identifier extraction from URLs
 * - `app_controller`: Request handling and response mapping
 * - `server`: HTTP front end
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod app_config;
pub mod app_controller;
pub mod caption_parser;
pub mod entities;
pub mod errors;
pub mod language_utils;
pub mod resolver;
pub mod server;
pub mod upstream;
pub mod video_id;

pub use app_config::Config;
pub use app_controller::{Controller, TranscriptRequest, TranscriptResponse};
pub use errors::{AppError, ResolveError, TransportError};
pub use resolver::{CaptionResolver, CaptionTrack, ResolutionResult, TrackKind};
pub use video_id::{VideoId, extract_video_id};
