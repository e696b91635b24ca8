use super::slack_transport::{SlackTransport, TransportFailure, TransportResponse};
use anyhow::Context as _;
use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Implementation for calling the Slack Web API over HTTPS
pub struct HttpSlackTransport {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl HttpSlackTransport {
    /// Create a new HttpSlackTransport
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root (e.g., `https://slack.com/api/`)
    /// * `token` - Bot token sent as a bearer credential
    /// * `timeout` - Whole-request timeout
    /// * `connect_timeout` - Connection establishment timeout
    pub fn new(
        mut base_url: Url,
        token: String,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> anyhow::Result<Self> {
        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Building HTTP Client")?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Get the API root URL (for testing)
    #[cfg(test)]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl SlackTransport for HttpSlackTransport {
    async fn get(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportFailure> {
        let url = self
            .base_url
            .join(method)
            .map_err(|err| TransportFailure(format!("Invalid API method URL: {err}")))?;

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|err| TransportFailure(err.to_string()))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response
            .text()
            .await
            .map_err(|err| TransportFailure(err.to_string()))?;

        debug!(%method, %status, ?retry_after, body_len = body.len(), "Slack API responded");

        Ok(TransportResponse {
            status,
            retry_after,
            body,
        })
    }
}
