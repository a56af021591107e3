//! Snapshot builders shared by the search unit tests.

use crate::model::{ChannelRecord, DirectRecord, GroupRecord, StateSnapshot, UserRecord};

pub(crate) const SELF_ID: &str = "U000";

pub(crate) fn user(id: &str, real_name: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: real_name.to_lowercase(),
        real_name: real_name.to_string(),
        display_name: String::new(),
        is_bot: false,
    }
}

pub(crate) fn channel(id: &str, name: &str) -> ChannelRecord {
    ChannelRecord {
        id: id.to_string(),
        name: name.to_string(),
        is_channel: true,
        is_group: false,
    }
}

pub(crate) fn private_channel(id: &str, name: &str) -> ChannelRecord {
    ChannelRecord {
        is_channel: false,
        is_group: true,
        ..channel(id, name)
    }
}

pub(crate) fn dm(id: &str, user: &str) -> DirectRecord {
    DirectRecord {
        id: id.to_string(),
        user: user.to_string(),
    }
}

pub(crate) fn group(id: &str, members: &[&str]) -> GroupRecord {
    GroupRecord {
        id: id.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

/// Channels `general` and `general-announcements`; users Alice (online),
/// Bob (offline) and Carol; DMs with Alice and Bob; one group of Alice and
/// Carol with the current user.
pub(crate) fn workspace() -> StateSnapshot {
    StateSnapshot::new()
        .with_self_id(SELF_ID)
        .with_user(user(SELF_ID, "Me Myself"))
        .with_user(user("U1", "Alice"))
        .with_user(user("U2", "Bob"))
        .with_user(user("U3", "Carol"))
        .with_online("U1")
        .with_channel(channel("C1", "general"))
        .with_channel(channel("C2", "general-announcements"))
        .with_dm(dm("D1", "U1"))
        .with_dm(dm("D2", "U2"))
        .with_group(group("G1", &[SELF_ID, "U1", "U3"]))
}
