use thiserror::Error;

/// Fatal outcomes of a Slack API call
///
/// Transport failures and rate limits are retried inside `SlackClient` and
/// only show up here once their budget is spent. Everything else is fatal on
/// first sight.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("SLACK_BOT_TOKEN is not set")]
    MissingCredential,

    #[error("Slack rejected the bot token ({code})")]
    InvalidCredential { code: String },

    #[error("Not in channel {channel}. Add the Slack app to the channel integrations.")]
    NotInChannel { channel: String },

    #[error("Missing OAuth scope (needed: {needed}, provided: {provided})")]
    InsufficientScope { needed: String, provided: String },

    #[error("Message {timestamp} not found in channel {channel}")]
    MessageNotFound { channel: String, timestamp: String },

    #[error("Slack API error: {code}")]
    UnknownPlatform { code: String },

    #[error("Transport failure after {attempts} attempts: {message}")]
    Transport { attempts: u32, message: String },

    #[error("Still rate limited after {retries} retries")]
    RateLimitExceeded { retries: u32 },
}

/// Scope/channel context needed to turn an error code into a `PlatformError`
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorContext<'a> {
    pub channel: Option<&'a str>,
    pub timestamp: Option<&'a str>,
    pub needed: Option<&'a str>,
    pub provided: Option<&'a str>,
}

impl PlatformError {
    /// Response body was not the shape we expected
    pub fn invalid_response() -> Self {
        Self::UnknownPlatform {
            code: "invalid_response".to_string(),
        }
    }

    /// Map a Slack `error` code to the taxonomy
    ///
    /// `ratelimited` is not handled here; the client treats it as a retryable
    /// condition before classification.
    pub fn from_code(code: &str, ctx: ErrorContext<'_>) -> Self {
        let unknown = || "unknown".to_string();

        match code {
            "not_authed" => Self::MissingCredential,
            "invalid_auth" | "token_revoked" | "token_expired" | "account_inactive" => {
                Self::InvalidCredential {
                    code: code.to_string(),
                }
            }
            // Private channels the app cannot see report channel_not_found
            "not_in_channel" | "channel_not_found" => Self::NotInChannel {
                channel: ctx.channel.map_or_else(unknown, str::to_string),
            },
            "missing_scope" => Self::InsufficientScope {
                needed: ctx.needed.map_or_else(unknown, str::to_string),
                provided: ctx.provided.map_or_else(unknown, str::to_string),
            },
            "message_not_found" => Self::MessageNotFound {
                channel: ctx.channel.map_or_else(unknown, str::to_string),
                timestamp: ctx.timestamp.map_or_else(unknown, str::to_string),
            },
            other => Self::UnknownPlatform {
                code: other.to_string(),
            },
        }
    }
}
