//! Searchable conversation entities.
//!
//! An [`Entity`] is one row the switcher can jump to: a channel, a one-to-one
//! direct message, or a multi-person group. Member lists are shaped the same
//! way for direct messages and groups so matching never branches on kind.

use std::fmt;

/// Stable conversation handle returned to the navigation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidEntityId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidEntityId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected entity id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEntityId {
    /// Ids must be non-empty.
    #[error("Entity ID cannot be empty")]
    Empty,
}

/// Presence classification of a direct-message peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectKind {
    /// Automated user (the built-in bot or any `is_bot` account).
    Bot,
    /// Peer currently online.
    Online,
    /// Peer away or offline.
    Offline,
}

/// Icon classification derived from entity kind.
///
/// The presentation layer maps these to glyphs; the core never renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconHint {
    /// Public channel.
    Channel,
    /// Private channel.
    PrivateChannel,
    /// Direct message with a bot.
    Bot,
    /// Direct message with an online user.
    Online,
    /// Direct message with an offline user.
    Offline,
    /// Multi-person group conversation.
    Group,
}

impl IconHint {
    /// Short stable name, used by the plain-text output mode.
    pub fn as_str(self) -> &'static str {
        match self {
            IconHint::Channel => "channel",
            IconHint::PrivateChannel => "private",
            IconHint::Bot => "bot",
            IconHint::Online => "online",
            IconHint::Offline => "offline",
            IconHint::Group => "group",
        }
    }
}

impl fmt::Display for IconHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A searchable conversation.
///
/// Sum type: each variant carries only the fields relevant to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    /// Named public or private channel.
    Channel {
        /// Conversation id.
        id: EntityId,
        /// Channel name.
        label: String,
        /// Private channels get a distinct icon.
        private: bool,
    },
    /// One-to-one conversation.
    Direct {
        /// Conversation id.
        id: EntityId,
        /// Peer display name.
        label: String,
        /// Peer presence classification.
        kind: DirectKind,
        /// Singleton list holding the peer display name.
        members: Vec<String>,
    },
    /// Multi-person conversation.
    Group {
        /// Conversation id.
        id: EntityId,
        /// Member names joined with `", "`.
        label: String,
        /// Display names of every member except the current user.
        members: Vec<String>,
    },
}

impl Entity {
    /// Build a channel entity.
    pub fn channel(id: EntityId, label: impl Into<String>, private: bool) -> Self {
        Entity::Channel {
            id,
            label: label.into(),
            private,
        }
    }

    /// Build a direct-message entity; the member list is the peer name.
    pub fn direct(id: EntityId, peer_name: impl Into<String>, kind: DirectKind) -> Self {
        let label = peer_name.into();
        Entity::Direct {
            id,
            members: vec![label.clone()],
            label,
            kind,
        }
    }

    /// Build a group entity; the label is derived from the member names.
    pub fn group(id: EntityId, members: Vec<String>) -> Self {
        Entity::Group {
            id,
            label: members.join(", "),
            members,
        }
    }

    /// Conversation id.
    pub fn id(&self) -> &EntityId {
        match self {
            Entity::Channel { id, .. } | Entity::Direct { id, .. } | Entity::Group { id, .. } => id,
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            Entity::Channel { label, .. }
            | Entity::Direct { label, .. }
            | Entity::Group { label, .. } => label,
        }
    }

    /// Member display names. Empty for channels.
    pub fn members(&self) -> &[String] {
        match self {
            Entity::Channel { .. } => &[],
            Entity::Direct { members, .. } | Entity::Group { members, .. } => members,
        }
    }

    /// Icon classification for the presentation layer.
    pub fn icon(&self) -> IconHint {
        match self {
            Entity::Channel { private: false, .. } => IconHint::Channel,
            Entity::Channel { private: true, .. } => IconHint::PrivateChannel,
            Entity::Direct { kind, .. } => match kind {
                DirectKind::Bot => IconHint::Bot,
                DirectKind::Online => IconHint::Online,
                DirectKind::Offline => IconHint::Offline,
            },
            Entity::Group { .. } => IconHint::Group,
        }
    }
}

/// One row of search output handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Conversation id, signalled on commit.
    pub id: EntityId,
    /// Display label.
    pub label: String,
    /// Icon classification.
    pub icon: IconHint,
}

impl From<&Entity> for SearchResult {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id().clone(),
            label: entity.label().to_string(),
            icon: entity.icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> EntityId {
        EntityId::new(raw).unwrap()
    }

    #[test]
    fn entity_id_rejects_empty_string() {
        assert_eq!(EntityId::new(""), Err(InvalidEntityId::Empty));
    }

    #[test]
    fn direct_members_is_singleton_peer_name() {
        let dm = Entity::direct(id("D1"), "Alice", DirectKind::Online);
        assert_eq!(dm.members(), ["Alice".to_string()]);
        assert_eq!(dm.label(), "Alice");
    }

    #[test]
    fn group_label_joins_member_names() {
        let group = Entity::group(id("G1"), vec!["Alice".into(), "Carol".into()]);
        assert_eq!(group.label(), "Alice, Carol");
        assert_eq!(group.members().len(), 2);
    }

    #[test]
    fn channel_has_no_members() {
        let channel = Entity::channel(id("C1"), "general", false);
        assert!(channel.members().is_empty());
    }

    #[test]
    fn icon_reflects_kind() {
        assert_eq!(
            Entity::channel(id("C1"), "general", false).icon(),
            IconHint::Channel
        );
        assert_eq!(
            Entity::channel(id("C2"), "secret", true).icon(),
            IconHint::PrivateChannel
        );
        assert_eq!(
            Entity::direct(id("D1"), "bot", DirectKind::Bot).icon(),
            IconHint::Bot
        );
        assert_eq!(
            Entity::direct(id("D2"), "Bob", DirectKind::Offline).icon(),
            IconHint::Offline
        );
        assert_eq!(
            Entity::group(id("G1"), vec!["a".into(), "b".into()]).icon(),
            IconHint::Group
        );
    }

    #[test]
    fn search_result_copies_id_label_and_icon() {
        let dm = Entity::direct(id("D1"), "Alice", DirectKind::Online);
        let result = SearchResult::from(&dm);
        assert_eq!(result.id.as_str(), "D1");
        assert_eq!(result.label, "Alice");
        assert_eq!(result.icon, IconHint::Online);
    }
}
