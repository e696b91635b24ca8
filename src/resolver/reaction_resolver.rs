use super::progress::ProgressReporter;
use crate::adapters::{PlatformError, SlackService};
use crate::model::{MessageRef, ResolvedUser};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// A fatal platform error plus the lookup that produced it
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Failed to fetch reactions for message {timestamp} in channel {channel}")]
    Reactions {
        channel: String,
        timestamp: String,
        #[source]
        source: PlatformError,
    },

    #[error("Failed to resolve user {user_id}")]
    UserProfile {
        user_id: String,
        #[source]
        source: PlatformError,
    },
}

impl ResolveError {
    /// The underlying classification, unmodified
    pub fn kind(&self) -> &PlatformError {
        match self {
            Self::Reactions { source, .. } | Self::UserProfile { source, .. } => source,
        }
    }
}

/// Resolve who reacted to a message with a given emoji
pub struct ReactionResolver<S>
where
    S: SlackService,
{
    slack: Arc<S>,
}

impl<S> ReactionResolver<S>
where
    S: SlackService,
{
    /// Create a new ReactionResolver
    ///
    /// # Arguments
    ///
    /// * `slack` - The Slack service used for both lookups
    pub fn new(slack: Arc<S>) -> Self {
        Self { slack }
    }

    /// Fetch and label the users who reacted with `emoji_name`
    ///
    /// Lookups run one at a time in reaction order. The first failed lookup
    /// aborts the whole operation; there is no partial result.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to inspect
    /// * `emoji_name` - Emoji name without colons, matched exactly
    /// * `progress` - Receives `completed/total` after every resolved user
    ///
    /// # Returns
    ///
    /// Labeled users in first-seen order; empty when nobody used the emoji
    pub async fn fetch_reacting_users(
        &self,
        message: &MessageRef,
        emoji_name: &str,
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<ResolvedUser>, ResolveError> {
        let reactions = self.slack.fetch_reactions(message).await.map_err(|source| {
            ResolveError::Reactions {
                channel: message.channel().to_string(),
                timestamp: message.timestamp().to_string(),
                source,
            }
        })?;

        if let Some(text) = reactions.message_text.as_deref() {
            info!(%text, "Message content");
        }

        let Some(entry) = reactions.find(emoji_name) else {
            debug!(%emoji_name, "No reaction with this emoji");
            return Ok(Vec::new());
        };

        let user_ids = unique_in_order(&entry.reacting_user_ids);
        let total = user_ids.len();
        info!(%emoji_name, users = total, "Fetching user names");

        let mut resolved = Vec::with_capacity(total);
        for user_id in user_ids {
            let profile = self
                .slack
                .fetch_user_profile(user_id)
                .await
                .map_err(|source| ResolveError::UserProfile {
                    user_id: user_id.to_string(),
                    source,
                })?;

            resolved.push(ResolvedUser::from(&profile));
            progress.on_resolved(resolved.len(), total);
        }

        Ok(resolved)
    }
}

/// Drop repeated IDs, keeping the first occurrence
fn unique_in_order(ids: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    ids.iter()
        .map(String::as_str)
        .filter(|id| seen.insert(*id))
        .collect()
}
