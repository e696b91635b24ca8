use super::platform_error::PlatformError;
use crate::model::{MessageRef, ReactionSet, UserProfile};
use async_trait::async_trait;

/// Slack operations the resolver depends on
///
/// Both operations are read-only and safe to retry. Implementations return
/// only fatal errors; anything retryable has already been retried.
#[async_trait]
pub trait SlackService: Send + Sync {
    /// Fetch every reaction on a message
    ///
    /// The returned set is complete: continuation pages are followed and
    /// merged before returning.
    async fn fetch_reactions(&self, message: &MessageRef) -> Result<ReactionSet, PlatformError>;

    /// Fetch the profile of one user
    ///
    /// # Arguments
    ///
    /// * `user_id` - Slack user ID (e.g., "U0123ABCD")
    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile, PlatformError>;
}
