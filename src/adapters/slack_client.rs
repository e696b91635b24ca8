use super::api_response::{ApiEnvelope, ReactionsGetBody, UsersInfoBody};
use super::platform_error::{ErrorContext, PlatformError};
use super::retry_policy::RetryPolicy;
use super::slack_service::SlackService;
use super::slack_transport::{SlackTransport, TransportFailure, TransportResponse};
use crate::model::{MessageRef, ReactionSet, UserProfile};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Upper bound on `reactions.get` pages followed for one message
pub const MAX_REACTION_PAGES: u32 = 100;

/// What one try of a call amounted to
#[derive(Debug, PartialEq)]
enum Attempt {
    Done(serde_json::Value),
    TransportFailed(String),
    RateLimited(Option<Duration>),
}

/// Slack client with retrying and error classification
///
/// Every call runs a bounded loop: transport failures back off
/// exponentially, rate limits sleep for the advertised delay, and
/// everything else is classified into a fatal `PlatformError`.
pub struct SlackClient<T>
where
    T: SlackTransport,
{
    transport: Arc<T>,
    policy: RetryPolicy,
}

impl<T> SlackClient<T>
where
    T: SlackTransport,
{
    /// Create a new SlackClient
    ///
    /// # Arguments
    ///
    /// * `transport` - Issues the HTTP calls (credential already injected)
    /// * `policy` - Retry bounds
    pub fn new(transport: Arc<T>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Issue one logical call and return the `ok: true` body
    async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
        ctx: ErrorContext<'_>,
    ) -> Result<R, PlatformError> {
        let mut transport_failures = 0u32;
        let mut rate_limit_retries = 0u32;

        loop {
            let outcome = self.transport.get(method, query).await;

            match classify(outcome, ctx)? {
                Attempt::Done(body) => {
                    return serde_json::from_value(body).map_err(|err| {
                        warn!(%method, ?err, "Slack response is missing expected fields");
                        PlatformError::invalid_response()
                    });
                }
                Attempt::TransportFailed(message) => {
                    transport_failures += 1;
                    if transport_failures >= self.policy.max_transport_attempts {
                        return Err(PlatformError::Transport {
                            attempts: transport_failures,
                            message,
                        });
                    }

                    let delay = self.policy.transport_backoff(transport_failures);
                    warn!(
                        %method,
                        attempt = transport_failures,
                        delay_ms = delay.as_millis() as u64,
                        error = %message,
                        "Slack call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Attempt::RateLimited(advertised) => {
                    if rate_limit_retries >= self.policy.max_rate_limit_retries {
                        return Err(PlatformError::RateLimitExceeded {
                            retries: rate_limit_retries,
                        });
                    }
                    rate_limit_retries += 1;

                    let delay = self.policy.rate_limit_delay(advertised);
                    warn!(
                        %method,
                        retry = rate_limit_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Rate limited by Slack, waiting"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

/// Turn one raw outcome into a retry decision or a fatal error
fn classify(
    outcome: Result<TransportResponse, TransportFailure>,
    ctx: ErrorContext<'_>,
) -> Result<Attempt, PlatformError> {
    let response = match outcome {
        Ok(response) => response,
        Err(TransportFailure(message)) => return Ok(Attempt::TransportFailed(message)),
    };

    if response.status == StatusCode::TOO_MANY_REQUESTS {
        return Ok(Attempt::RateLimited(response.retry_after));
    }
    if response.status.is_server_error() {
        return Ok(Attempt::TransportFailed(format!("HTTP {}", response.status)));
    }

    let unparseable = || {
        if response.status.is_success() {
            PlatformError::invalid_response()
        } else {
            PlatformError::UnknownPlatform {
                code: format!("http_{}", response.status.as_u16()),
            }
        }
    };

    let body: serde_json::Value =
        serde_json::from_str(&response.body).map_err(|_| unparseable())?;
    let envelope = ApiEnvelope::deserialize(&body).map_err(|_| unparseable())?;

    if envelope.ok {
        return Ok(Attempt::Done(body));
    }

    match envelope.error.as_deref() {
        Some("ratelimited") => Ok(Attempt::RateLimited(response.retry_after)),
        Some(code) => Err(PlatformError::from_code(
            code,
            ErrorContext {
                needed: envelope.needed.as_deref(),
                provided: envelope.provided.as_deref(),
                ..ctx
            },
        )),
        None => Err(unparseable()),
    }
}

#[async_trait]
impl<T> SlackService for SlackClient<T>
where
    T: SlackTransport,
{
    async fn fetch_reactions(&self, message: &MessageRef) -> Result<ReactionSet, PlatformError> {
        info!(
            channel = %message.channel(),
            timestamp = %message.timestamp(),
            "Fetching reactions"
        );

        let ctx = ErrorContext {
            channel: Some(message.channel()),
            timestamp: Some(message.timestamp()),
            ..ErrorContext::default()
        };

        let mut reactions = ReactionSet::default();
        let mut cursor: Option<String> = None;
        let mut seen_cursors = HashSet::new();
        let mut pages = 0u32;

        loop {
            let mut query = vec![
                ("channel", message.channel()),
                ("timestamp", message.timestamp()),
                ("full", "true"),
            ];
            if let Some(cursor) = cursor.as_deref() {
                query.push(("cursor", cursor));
            }

            let body: ReactionsGetBody = self.call("reactions.get", &query, ctx).await?;
            pages += 1;

            if reactions.message_text.is_none() {
                reactions.message_text = body.message.text;
            }
            reactions.merge_page(body.message.reactions.into_iter().map(Into::into).collect());

            match body.response_metadata.as_ref().and_then(|m| m.cursor()) {
                Some(next) if pages >= MAX_REACTION_PAGES => {
                    warn!(
                        cursor = %next,
                        pages,
                        "Slack kept returning cursors, giving up on pagination"
                    );
                    return Err(PlatformError::UnknownPlatform {
                        code: "pagination_limit".to_string(),
                    });
                }
                Some(next) if seen_cursors.insert(next.to_string()) => {
                    debug!(page = pages, "Following reactions cursor");
                    cursor = Some(next.to_string());
                }
                Some(next) => {
                    warn!(cursor = %next, "Slack repeated a cursor, stopping pagination");
                    break;
                }
                None => break,
            }
        }

        debug!(
            pages,
            emoji = reactions.entries.len(),
            "Reactions fetched"
        );
        Ok(reactions)
    }

    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile, PlatformError> {
        debug!(%user_id, "Fetching user profile");

        let body: UsersInfoBody = self
            .call("users.info", &[("user", user_id)], ErrorContext::default())
            .await?;

        Ok(body.user.into())
    }
}
