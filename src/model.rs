//! Domain types shared by the parser, the Slack client and the resolver.

use crate::reference::{ReferenceError, is_valid_timestamp};

/// Canonical reference to one message: channel ID plus message timestamp
///
/// Only constructible through validation, so holders can trust that
/// `channel` is non-empty and `timestamp` has the `SSSSSSSSSS.UUUUUU` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    channel: String,
    timestamp: String,
}

impl MessageRef {
    /// Build a validated reference
    ///
    /// # Errors
    ///
    /// * `ReferenceError::MalformedTimestamp` - timestamp is not `\d{10}\.\d{6}`
    /// * `ReferenceError::InputConflict` - channel is empty
    pub fn new(
        channel: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Result<Self, ReferenceError> {
        let channel = channel.into();
        let timestamp = timestamp.into();

        if channel.is_empty() {
            return Err(ReferenceError::InputConflict);
        }
        if !is_valid_timestamp(&timestamp) {
            return Err(ReferenceError::MalformedTimestamp { timestamp });
        }

        Ok(Self { channel, timestamp })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl std::fmt::Display for MessageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.channel, self.timestamp)
    }
}

/// One emoji attached to a message and the users who applied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEntry {
    pub emoji_name: String,
    pub reacting_user_ids: Vec<String>,
    pub count: u64,
}

/// Every reaction on one message, fully materialized across pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionSet {
    pub entries: Vec<ReactionEntry>,
    /// Message text, when the platform returned it
    pub message_text: Option<String>,
}

impl ReactionSet {
    /// Find the entry for an emoji (exact, case-sensitive match)
    pub fn find(&self, emoji_name: &str) -> Option<&ReactionEntry> {
        self.entries.iter().find(|e| e.emoji_name == emoji_name)
    }

    /// Merge one page of entries into the set
    ///
    /// An emoji already present gets its users appended and its count
    /// summed; new emoji are appended in page order.
    pub fn merge_page(&mut self, page: Vec<ReactionEntry>) {
        for entry in page {
            match self
                .entries
                .iter_mut()
                .find(|e| e.emoji_name == entry.emoji_name)
            {
                Some(existing) => {
                    existing.reacting_user_ids.extend(entry.reacting_user_ids);
                    existing.count += entry.count;
                }
                None => self.entries.push(entry),
            }
        }
    }
}

/// Profile fields returned by the user lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    /// Account handle, informational only
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub real_name: Option<String>,
}

impl UserProfile {
    /// Display label: display name, then real name, then the raw ID
    ///
    /// Empty strings count as absent.
    pub fn label(&self) -> &str {
        non_empty(self.display_name.as_deref())
            .or_else(|| non_empty(self.real_name.as_deref()))
            .unwrap_or(&self.id)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// A reacting user with the label shown to the reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    pub id: String,
    pub label: String,
}

impl From<&UserProfile> for ResolvedUser {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            label: profile.label().to_string(),
        }
    }
}
