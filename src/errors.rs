/*!
 * Error types for the ytcaptions application.
 *
 * Transport errors never escape the resolver: every failed upstream call is
 * turned into "no result" at the call site. Only `ResolveError` reaches the
 * caller, and it maps one-to-one onto an HTTP status code.
 */

use thiserror::Error;

/// Errors raised by a single call to the caption endpoint
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be built or sent
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The endpoint answered with a non-success status
    #[error("Endpoint responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Error establishing the connection or reading the body
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else if error.is_connect() || error.is_body() || error.is_decode() {
            Self::ConnectionError(error.to_string())
        } else if let Some(status) = error.status() {
            Self::ApiError {
                status_code: status.as_u16(),
                message: error.to_string(),
            }
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Caller-visible outcome of a failed transcript request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// Neither an id nor a usable URL was supplied
    #[error("Missing or invalid ?url= or ?id=")]
    NoIdentifier,

    /// Every language, track, translation and format was tried
    #[error("No transcript available")]
    NoTranscriptFound,

    /// Anything else, e.g. a panic inside the resolution task
    #[error("{0}")]
    Unexpected(String),
}

impl ResolveError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NoIdentifier => 400,
            Self::NoTranscriptFound => 404,
            Self::Unexpected(_) => 500,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error reading or writing a file
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the caption endpoint
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),


    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
