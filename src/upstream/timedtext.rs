use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, redirect};
use std::time::Duration;
use url::Url;

use crate::app_config::UpstreamConfig;
use crate::errors::TransportError;
use crate::resolver::TimedTextQuery;
use crate::upstream::CaptionSource;

/// HTTP client for the timed-text endpoint
#[derive(Debug, Clone)]
pub struct TimedTextClient {
    /// Endpoint base path; every call only changes the query string
    base_url: Url,
    /// HTTP client carrying the browser-like default headers
    client: Client,
}

impl TimedTextClient {
    /// Create a client from the upstream configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TransportError::RequestFailed(format!("Invalid endpoint URL '{}': {}", config.base_url, e)))?;

        let mut headers = HeaderMap::new();
        let accept_language = HeaderValue::from_str(&config.accept_language)
            .map_err(|e| TransportError::RequestFailed(format!("Invalid Accept-Language header: {}", e)))?;
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(redirect::Policy::limited(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Full URL of the call for a query
    pub fn request_url(&self, query: &TimedTextQuery) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&query.to_query_string()));
        url
    }
}

#[async_trait]
impl CaptionSource for TimedTextClient {
    async fn fetch_text(&self, query: &TimedTextQuery) -> Result<String, TransportError> {
        let url = self.request_url(query);
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::ApiError {
                status_code: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown status").to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
