use crate::model::{ReactionEntry, UserProfile};
use serde::Deserialize;

/// Fields every Slack Web API response carries
///
/// Parsed first so that `ok: false` bodies are classified before the
/// method-specific shape is enforced.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiEnvelope {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Scope the call needed (only on `missing_scope`)
    #[serde(default)]
    pub needed: Option<String>,
    /// Scopes the token has (only on `missing_scope`)
    #[serde(default)]
    pub provided: Option<String>,
}

/// Successful `reactions.get` body
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReactionsGetBody {
    pub message: ReactedMessage,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReactedMessage {
    #[serde(default)]
    pub text: Option<String>,
    /// Absent when the message has no reactions at all
    #[serde(default)]
    pub reactions: Vec<WireReaction>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireReaction {
    pub name: String,
    pub users: Vec<String>,
    pub count: u64,
}

impl From<WireReaction> for ReactionEntry {
    fn from(reaction: WireReaction) -> Self {
        Self {
            emoji_name: reaction.name,
            reacting_user_ids: reaction.users,
            count: reaction.count,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl ResponseMetadata {
    /// Continuation cursor, treating `""` as end of results
    pub fn cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}

/// Successful `users.info` body
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UsersInfoBody {
    pub user: WireUser,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub profile: WireProfile,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireProfile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
}

impl From<WireUser> for UserProfile {
    fn from(user: WireUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            display_name: user.profile.display_name,
            real_name: user.profile.real_name,
        }
    }
}
