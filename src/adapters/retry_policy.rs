use std::time::Duration;

/// Bounds for retrying Slack calls
///
/// Transport failures and rate limits have separate budgets: a call may
/// spend all of its rate-limit retries without losing transport attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total tries for a call that keeps failing at the transport level
    pub max_transport_attempts: u32,
    /// Delay before the second try; doubled for each further try
    pub initial_backoff: Duration,
    /// Rate-limited responses tolerated per call
    pub max_rate_limit_retries: u32,
    /// Wait used when a rate-limited response carries no Retry-After
    pub default_rate_limit_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_transport_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_rate_limit_retries: 5,
            default_rate_limit_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Backoff after the given failed attempt (1-based)
    pub fn transport_backoff(&self, failed_attempt: u32) -> Duration {
        let exponent = failed_attempt.saturating_sub(1).min(16);
        self.initial_backoff.saturating_mul(1u32 << exponent)
    }

    /// Wait before retrying a rate-limited call
    pub fn rate_limit_delay(&self, advertised: Option<Duration>) -> Duration {
        advertised.unwrap_or(self.default_rate_limit_delay)
    }
}
