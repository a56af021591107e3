//! Immutable snapshot of the external chat state.
//!
//! The switcher never reaches into a global store. Everything it needs is
//! captured here once per session open and handed to catalog construction.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Id of the workspace's built-in bot user.
pub const BUILTIN_BOT_ID: &str = "USLACKBOT";

/// A known user.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// User id.
    pub id: String,
    /// Account handle.
    #[serde(default)]
    pub name: String,
    /// Full name.
    #[serde(default)]
    pub real_name: String,
    /// Preferred display name, often empty.
    #[serde(default)]
    pub display_name: String,
    /// Automated account.
    #[serde(default)]
    pub is_bot: bool,
}

impl UserRecord {
    /// First non-empty of display name, real name, account handle.
    pub fn preferred_name(&self) -> &str {
        [&self.display_name, &self.real_name, &self.name]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or(&self.name)
    }
}

/// A channel-like conversation record.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChannelRecord {
    /// Conversation id.
    pub id: String,
    /// Channel name.
    #[serde(default)]
    pub name: String,
    /// Public channel.
    #[serde(default)]
    pub is_channel: bool,
    /// Private channel.
    #[serde(default)]
    pub is_group: bool,
}

/// A one-to-one conversation record.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DirectRecord {
    /// Conversation id.
    pub id: String,
    /// Peer user id.
    pub user: String,
}

/// A multi-person conversation record.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GroupRecord {
    /// Conversation id.
    pub id: String,
    /// Member user ids, current user included.
    #[serde(default)]
    pub members: Vec<String>,
}

/// Resolves user ids to user records.
pub trait UserResolver {
    /// Look up a user. `None` when the id is unknown.
    fn find_user(&self, user_id: &str) -> Option<&UserRecord>;

    /// Display name for a user id, if it resolves.
    fn display_name(&self, user_id: &str) -> Option<&str> {
        self.find_user(user_id).map(UserRecord::preferred_name)
    }
}

/// Wire shape of a snapshot document, before lookup tables are built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    self_id: Option<String>,
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    online_users: Vec<String>,
    #[serde(default)]
    channels: Vec<ChannelRecord>,
    #[serde(default)]
    dms: Vec<DirectRecord>,
    #[serde(default)]
    groups: Vec<GroupRecord>,
}

/// Point-in-time view of channels, users and presence.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "SnapshotDocument")]
pub struct StateSnapshot {
    self_id: Option<String>,
    users: HashMap<String, UserRecord>,
    online_users: HashSet<String>,
    bot_user_ids: HashSet<String>,
    channels: Vec<ChannelRecord>,
    dms: Vec<DirectRecord>,
    groups: Vec<GroupRecord>,
}

impl From<SnapshotDocument> for StateSnapshot {
    fn from(doc: SnapshotDocument) -> Self {
        let users = doc
            .users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            self_id: doc.self_id,
            users,
            online_users: doc.online_users.into_iter().collect(),
            bot_user_ids: HashSet::from([BUILTIN_BOT_ID.to_string()]),
            channels: doc.channels,
            dms: doc.dms,
            groups: doc.groups,
        }
    }
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl StateSnapshot {
    /// Empty snapshot, mostly useful as a builder starting point.
    pub fn new() -> Self {
        SnapshotDocument::default().into()
    }

    /// Set the current user.
    pub fn with_self_id(mut self, self_id: impl Into<String>) -> Self {
        self.self_id = Some(self_id.into());
        self
    }

    /// Add a user record.
    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.insert(user.id.clone(), user);
        self
    }

    /// Mark a user as online.
    pub fn with_online(mut self, user_id: impl Into<String>) -> Self {
        self.online_users.insert(user_id.into());
        self
    }

    /// Append a channel record.
    pub fn with_channel(mut self, channel: ChannelRecord) -> Self {
        self.channels.push(channel);
        self
    }

    /// Append a direct-message record.
    pub fn with_dm(mut self, dm: DirectRecord) -> Self {
        self.dms.push(dm);
        self
    }

    /// Append a group record.
    pub fn with_group(mut self, group: GroupRecord) -> Self {
        self.groups.push(group);
        self
    }

    /// Treat additional user ids as bots, on top of the built-in one.
    pub fn with_bot_user_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bot_user_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// The current user's id, if known.
    pub fn self_id(&self) -> Option<&str> {
        self.self_id.as_deref()
    }

    /// Number of known users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Whether the user is currently online.
    pub fn is_online(&self, user_id: &str) -> bool {
        self.online_users.contains(user_id)
    }

    /// Whether the user should be presented as a bot.
    pub fn is_bot(&self, user: &UserRecord) -> bool {
        user.is_bot || self.bot_user_ids.contains(&user.id)
    }

    /// Channel records in store order.
    pub fn channels(&self) -> &[ChannelRecord] {
        &self.channels
    }

    /// Direct-message records in store order.
    pub fn dms(&self) -> &[DirectRecord] {
        &self.dms
    }

    /// Group records in store order.
    pub fn groups(&self) -> &[GroupRecord] {
        &self.groups
    }
}

impl UserResolver for StateSnapshot {
    fn find_user(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.get(user_id)
    }
}
