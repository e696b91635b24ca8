use crate::adapters::{PlatformError, RetryPolicy};
use anyhow::Context as _;
use serde::Deserialize;
use std::time::Duration;

/// Default Slack Web API root
fn default_slack_api_base_url() -> String {
    "https://slack.com/api/".to_string()
}

/// Default HTTP request timeout in seconds
fn default_http_timeout() -> u64 {
    30
}

/// Default HTTP connection timeout in seconds
fn default_http_connect_timeout() -> u64 {
    10
}

/// Default number of tries for a call failing at the transport level
fn default_max_transport_attempts() -> u32 {
    3
}

/// Default first backoff delay in milliseconds
fn default_initial_backoff_ms() -> u64 {
    500
}

/// Default number of rate-limit retries per call
fn default_max_rate_limit_retries() -> u32 {
    5
}

/// Default rate-limit wait in seconds when Slack sends no Retry-After
fn default_rate_limit_delay_secs() -> u64 {
    5
}

#[derive(Deserialize, Clone)]
pub struct Params {
    /// Absence is reported as `PlatformError::MissingCredential`, not as a
    /// configuration error
    #[serde(default)]
    pub slack_bot_token: Option<String>,
    #[serde(default = "default_slack_api_base_url")]
    pub slack_api_base_url: String,

    // HTTP Client Configuration
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
    #[serde(default = "default_http_connect_timeout")]
    pub http_connect_timeout: u64,

    // Retry Configuration
    #[serde(default = "default_max_transport_attempts")]
    pub max_transport_attempts: u32,
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    #[serde(default = "default_max_rate_limit_retries")]
    pub max_rate_limit_retries: u32,
    #[serde(default = "default_rate_limit_delay_secs")]
    pub default_rate_limit_delay_secs: u64,
}

/// Mask sensitive strings by showing only first and last few characters
///
/// Counts characters, not bytes, so non-ASCII input never splits a code point.
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    let char_count = s.chars().count();

    if char_count <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        return match s.chars().next() {
            Some(first) => format!("{first}***"),
            None => "<empty>".to_string(),
        };
    }

    let head: String = s.chars().take(VISIBLE_CHARS).collect();
    let tail: String = s.chars().skip(char_count - VISIBLE_CHARS).collect();

    format!("{head}***{tail}")
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field(
                "slack_bot_token",
                &self.slack_bot_token.as_deref().map(mask_token),
            )
            .field("slack_api_base_url", &self.slack_api_base_url)
            .field("http_timeout", &self.http_timeout)
            .field("http_connect_timeout", &self.http_connect_timeout)
            .field("max_transport_attempts", &self.max_transport_attempts)
            .field("initial_backoff_ms", &self.initial_backoff_ms)
            .field("max_rate_limit_retries", &self.max_rate_limit_retries)
            .field(
                "default_rate_limit_delay_secs",
                &self.default_rate_limit_delay_secs,
            )
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }

    /// The bot token, or `MissingCredential` if unset or blank
    pub fn bot_token(&self) -> Result<&str, PlatformError> {
        self.slack_bot_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(PlatformError::MissingCredential)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            // Zero would mean "never try"
            max_transport_attempts: self.max_transport_attempts.max(1),
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            max_rate_limit_retries: self.max_rate_limit_retries,
            default_rate_limit_delay: Duration::from_secs(self.default_rate_limit_delay_secs),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn http_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http_connect_timeout)
    }
}
