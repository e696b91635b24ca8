use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use whoreacted::adapters::{PlatformError, SlackService};
use whoreacted::model::{MessageRef, ReactionEntry, ReactionSet, UserProfile};

/// In-memory SlackService with canned answers
pub struct MockSlackService {
    reactions: Result<ReactionSet, PlatformError>,
    profiles: HashMap<String, Result<UserProfile, PlatformError>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Reactions { channel: String, timestamp: String },
    UserProfile(String),
}

impl Default for MockSlackService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSlackService {
    pub fn new() -> Self {
        Self {
            reactions: Ok(ReactionSet::default()),
            profiles: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a reaction entry to the canned reaction set
    pub fn with_reaction(mut self, name: &str, users: &[&str]) -> Self {
        let entry = ReactionEntry {
            emoji_name: name.to_string(),
            reacting_user_ids: users.iter().map(|u| u.to_string()).collect(),
            count: users.len() as u64,
        };
        if let Ok(set) = &mut self.reactions {
            set.entries.push(entry);
        }
        self
    }

    pub fn with_reactions_error(mut self, err: PlatformError) -> Self {
        self.reactions = Err(err);
        self
    }

    pub fn with_profile(mut self, id: &str, display_name: &str, real_name: &str) -> Self {
        self.profiles.insert(
            id.to_string(),
            Ok(UserProfile {
                id: id.to_string(),
                name: None,
                display_name: Some(display_name.to_string()),
                real_name: Some(real_name.to_string()),
            }),
        );
        self
    }

    pub fn with_profile_error(mut self, id: &str, err: PlatformError) -> Self {
        self.profiles.insert(id.to_string(), Err(err));
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn profile_calls(&self) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::UserProfile(id) => Some(id),
                RecordedCall::Reactions { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl SlackService for MockSlackService {
    async fn fetch_reactions(&self, message: &MessageRef) -> Result<ReactionSet, PlatformError> {
        self.calls.lock().unwrap().push(RecordedCall::Reactions {
            channel: message.channel().to_string(),
            timestamp: message.timestamp().to_string(),
        });
        self.reactions.clone()
    }

    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile, PlatformError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::UserProfile(user_id.to_string()));
        self.profiles
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| {
                Err(PlatformError::UnknownPlatform {
                    code: "user_not_found".to_string(),
                })
            })
    }
}
