//! Entry catalog: the flattened list of searchable conversations.
//!
//! Built once per switcher session from a [`StateSnapshot`] and read-only
//! afterwards. Reopening the switcher rebuilds it.

use std::collections::HashSet;

use tracing::debug;

use crate::model::{
    ChannelRecord, DirectKind, DirectRecord, Entity, EntityId, GroupRecord, StateSnapshot,
    UserResolver,
};

/// Immutable set of searchable conversations.
///
/// Channels and conversations (DMs and groups) are kept apart because the
/// no-query listing only shows channels, and mixed searches always list
/// channels first.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    channels: Vec<Entity>,
    conversations: Vec<Entity>,
}

impl Catalog {
    /// Build the catalog from a snapshot.
    ///
    /// Pure function of its input. Records that fail to resolve are skipped,
    /// never reported as errors:
    /// - channel records that are neither public nor private channels
    /// - DMs whose peer user is unknown
    /// - groups with any unknown member, or with no member besides the
    ///   current user
    /// - any record whose id was already taken (first wins)
    pub fn build(snapshot: &StateSnapshot) -> Self {
        let mut seen = HashSet::new();

        let channels: Vec<Entity> = snapshot
            .channels()
            .iter()
            .filter_map(channel_entity)
            .filter(|entity| claim_id(&mut seen, entity))
            .collect();

        let dms = snapshot
            .dms()
            .iter()
            .filter_map(|dm| direct_entity(snapshot, dm));
        let groups = snapshot
            .groups()
            .iter()
            .filter_map(|group| group_entity(snapshot, group));
        let conversations: Vec<Entity> = dms
            .chain(groups)
            .filter(|entity| claim_id(&mut seen, entity))
            .collect();

        debug!(
            channels = channels.len(),
            conversations = conversations.len(),
            "Catalog built"
        );

        Self {
            channels,
            conversations,
        }
    }

    /// Build a catalog directly from entities, preserving order.
    ///
    /// Channel entities go to the channel list, everything else to the
    /// conversation list. Duplicate ids are dropped.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut seen = HashSet::new();
        let mut catalog = Self::default();
        for entity in entities {
            if !claim_id(&mut seen, &entity) {
                continue;
            }
            match entity {
                Entity::Channel { .. } => catalog.channels.push(entity),
                _ => catalog.conversations.push(entity),
            }
        }
        catalog
    }

    /// Channels in snapshot order.
    pub fn channels(&self) -> &[Entity] {
        &self.channels
    }

    /// DMs followed by groups, each in snapshot order.
    pub fn conversations(&self) -> &[Entity] {
        &self.conversations
    }

    /// Listing shown when the switcher opens, before any search has run.
    pub fn initial_listing(&self) -> impl Iterator<Item = &Entity> {
        self.channels.iter().chain(self.conversations.iter())
    }

    /// Total number of entities.
    pub fn len(&self) -> usize {
        self.channels.len() + self.conversations.len()
    }

    /// Whether the catalog holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn claim_id(seen: &mut HashSet<EntityId>, entity: &Entity) -> bool {
    if seen.insert(entity.id().clone()) {
        true
    } else {
        debug!(id = %entity.id(), "Duplicate conversation id skipped");
        false
    }
}

fn entity_id(raw: &str) -> Option<EntityId> {
    match EntityId::new(raw) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(%err, "Conversation without id skipped");
            None
        }
    }
}

fn channel_entity(record: &ChannelRecord) -> Option<Entity> {
    if !record.is_channel && !record.is_group {
        return None;
    }
    let id = entity_id(&record.id)?;
    Some(Entity::channel(id, record.name.clone(), record.is_group))
}

fn direct_entity(snapshot: &StateSnapshot, record: &DirectRecord) -> Option<Entity> {
    let Some(peer) = snapshot.find_user(&record.user) else {
        debug!(dm = %record.id, user = %record.user, "DM peer unresolved, skipped");
        return None;
    };
    let id = entity_id(&record.id)?;

    let kind = if snapshot.is_bot(peer) {
        DirectKind::Bot
    } else if snapshot.is_online(&peer.id) {
        DirectKind::Online
    } else {
        DirectKind::Offline
    };

    Some(Entity::direct(id, peer.preferred_name(), kind))
}

fn group_entity(snapshot: &StateSnapshot, record: &GroupRecord) -> Option<Entity> {
    let mut unique = HashSet::new();
    let mut names = Vec::new();

    for member_id in &record.members {
        if !unique.insert(member_id.as_str()) {
            continue;
        }
        let Some(name) = snapshot.display_name(member_id) else {
            debug!(group = %record.id, user = %member_id, "Group member unresolved, group skipped");
            return None;
        };
        if snapshot.self_id() == Some(member_id.as_str()) {
            continue;
        }
        names.push(name.to_string());
    }

    if names.is_empty() {
        debug!(group = %record.id, "Group has no other members, skipped");
        return None;
    }

    let id = entity_id(&record.id)?;
    Some(Entity::group(id, names))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
