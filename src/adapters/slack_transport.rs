use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Raw HTTP outcome of one Slack Web API call
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: StatusCode,
    /// Parsed `Retry-After` header, if any
    pub retry_after: Option<Duration>,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            retry_after: None,
            body: body.into(),
        }
    }

    pub fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }
}

/// The request never produced an HTTP response (DNS, connect, timeout, body read)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportFailure(pub String);

/// Interface for issuing Slack Web API calls
///
/// Implementations only move bytes; retrying and classification live in
/// `SlackClient`.
#[async_trait]
pub trait SlackTransport: Send + Sync {
    /// Issue a GET for a Web API method
    ///
    /// # Arguments
    ///
    /// * `method` - API method name (e.g., "reactions.get")
    /// * `query` - Query parameters
    async fn get(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportFailure>;
}
