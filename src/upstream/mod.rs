/*!
 * Access to the caption-delivery endpoint.
 *
 * - `timedtext`: HTTP client for the real endpoint
 * - `mock`: scripted source for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::TransportError;
use crate::resolver::TimedTextQuery;

/// Common trait for anything that can answer timed-text queries
///
/// Implementations report every failure as a `TransportError`; the resolver
/// treats any error as "no result" and moves on to its next attempt.
#[async_trait]
pub trait CaptionSource: Send + Sync + Debug {
    /// Perform one call and return the raw response body
    ///
    /// # Arguments
    /// * `query` - The parameter set of the call
    ///
    /// # Returns
    /// * `Result<String, TransportError>` - The body of a successful response or an error
    async fn fetch_text(&self, query: &TimedTextQuery) -> Result<String, TransportError>;
}

pub mod mock;
pub mod timedtext;

pub use mock::{MockCaptionSource, MockReply};
pub use timedtext::TimedTextClient;
