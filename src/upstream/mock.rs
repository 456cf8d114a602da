/*!
 * Scripted caption source for testing.
 *
 * Routes match on the exact parameter set of a query (order-insensitive).
 * Queries with no matching route answer with a 404, which is what the real
 * endpoint does for most unknown combinations. Every query is recorded so
 * tests can assert on the order and number of upstream calls.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;

use crate::errors::TransportError;
use crate::resolver::TimedTextQuery;
use crate::upstream::CaptionSource;

/// Reply of a mock route
#[derive(Debug, Clone, PartialEq)]
pub enum MockReply {
    /// 200 with the given body
    Body(String),
    /// Non-success HTTP status
    Status(u16),
    /// Connection failure
    ConnectionError,
}

#[derive(Debug)]
struct MockRoute {
    params: BTreeMap<String, String>,
    reply: MockReply,
}

/// Mock caption source answering from a fixed route table
#[derive(Debug, Default)]
pub struct MockCaptionSource {
    routes: Vec<MockRoute>,
    requests: Mutex<Vec<TimedTextQuery>>,
}

impl MockCaptionSource {
    /// Create a mock with no routes; every call fails with 404
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer queries with exactly these parameters
    pub fn on(mut self, params: &[(&str, &str)], reply: MockReply) -> Self {
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.routes.push(MockRoute { params, reply });
        self
    }

    /// Answer queries with exactly these parameters with a 200 body
    pub fn on_body(self, params: &[(&str, &str)], body: impl Into<String>) -> Self {
        self.on(params, MockReply::Body(body.into()))
    }

    /// Every query received so far, in order
    pub fn requests(&self) -> Vec<TimedTextQuery> {
        self.requests.lock().clone()
    }

    /// Number of queries received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn find_reply(&self, query: &TimedTextQuery) -> Option<&MockReply> {
        let wanted: BTreeMap<String, String> = query
            .params()
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

        self.routes
            .iter()
            .find(|route| route.params == wanted)
            .map(|route| &route.reply)
    }
}

#[async_trait]
impl CaptionSource for MockCaptionSource {
    async fn fetch_text(&self, query: &TimedTextQuery) -> Result<String, TransportError> {
        self.requests.lock().push(query.clone());

        match self.find_reply(query) {
            Some(MockReply::Body(body)) => Ok(body.clone()),
            Some(MockReply::Status(status_code)) => Err(TransportError::ApiError {
                status_code: *status_code,
                message: "mock status".to_string(),
            }),
            Some(MockReply::ConnectionError) => Err(TransportError::ConnectionError(
                "mock connection failure".to_string(),
            )),
            None => Err(TransportError::ApiError {
                status_code: 404,
                message: "Not Found".to_string(),
            }),
        }
    }
}
