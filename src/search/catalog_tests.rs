//! Tests for catalog construction.

use super::*;
use crate::model::{IconHint, UserRecord, BUILTIN_BOT_ID};
use crate::search::fixtures::{channel, dm, group, private_channel, user, workspace, SELF_ID};

fn ids(entities: &[Entity]) -> Vec<&str> {
    entities.iter().map(|e| e.id().as_str()).collect()
}

// ===== Channels =====

#[test]
fn channels_keep_snapshot_order() {
    let catalog = Catalog::build(&workspace());
    assert_eq!(ids(catalog.channels()), vec!["C1", "C2"]);
}

#[test]
fn private_channels_get_private_icon() {
    let snapshot = StateSnapshot::new()
        .with_channel(channel("C1", "general"))
        .with_channel(private_channel("C2", "secret"));
    let catalog = Catalog::build(&snapshot);

    let icons: Vec<IconHint> = catalog.channels().iter().map(Entity::icon).collect();
    assert_eq!(icons, vec![IconHint::Channel, IconHint::PrivateChannel]);
}

#[test]
fn records_that_are_not_channels_are_skipped() {
    let mut not_a_channel = channel("C9", "im");
    not_a_channel.is_channel = false;
    let snapshot = StateSnapshot::new()
        .with_channel(not_a_channel)
        .with_channel(channel("C1", "general"));

    let catalog = Catalog::build(&snapshot);
    assert_eq!(ids(catalog.channels()), vec!["C1"]);
}

// ===== Direct messages =====

#[test]
fn dm_kind_reflects_presence() {
    let catalog = Catalog::build(&workspace());
    let alice = &catalog.conversations()[0];
    let bob = &catalog.conversations()[1];

    assert_eq!(alice.label(), "Alice");
    assert_eq!(alice.icon(), IconHint::Online);
    assert_eq!(bob.label(), "Bob");
    assert_eq!(bob.icon(), IconHint::Offline);
}

#[test]
fn builtin_bot_dm_is_a_bot_even_when_online() {
    let slackbot = UserRecord {
        id: BUILTIN_BOT_ID.to_string(),
        name: "slackbot".to_string(),
        real_name: String::new(),
        display_name: String::new(),
        is_bot: false,
    };
    let snapshot = StateSnapshot::new()
        .with_user(slackbot)
        .with_online(BUILTIN_BOT_ID)
        .with_dm(dm("D0", BUILTIN_BOT_ID));

    let catalog = Catalog::build(&snapshot);
    assert_eq!(catalog.conversations()[0].icon(), IconHint::Bot);
    assert_eq!(catalog.conversations()[0].label(), "slackbot");
}

#[test]
fn dm_with_unknown_peer_is_excluded() {
    let snapshot = workspace().with_dm(dm("D9", "U404"));
    let catalog = Catalog::build(&snapshot);
    assert!(!ids(catalog.conversations()).contains(&"D9"));
}

#[test]
fn dm_members_hold_peer_name() {
    let catalog = Catalog::build(&workspace());
    assert_eq!(catalog.conversations()[0].members(), ["Alice".to_string()]);
}

// ===== Groups =====

#[test]
fn group_excludes_current_user_from_members() {
    let catalog = Catalog::build(&workspace());
    let group = catalog
        .conversations()
        .iter()
        .find(|e| e.id().as_str() == "G1")
        .expect("group should be present");

    assert_eq!(group.members(), ["Alice".to_string(), "Carol".to_string()]);
    assert_eq!(group.label(), "Alice, Carol");
    assert_eq!(group.icon(), IconHint::Group);
}

#[test]
fn group_with_unresolvable_member_is_excluded() {
    let snapshot = workspace().with_group(group("G2", &[SELF_ID, "U1", "U404"]));
    let catalog = Catalog::build(&snapshot);
    assert!(!ids(catalog.conversations()).contains(&"G2"));
}

#[test]
fn group_with_only_current_user_is_excluded() {
    let snapshot = workspace().with_group(group("G3", &[SELF_ID]));
    let catalog = Catalog::build(&snapshot);
    assert!(!ids(catalog.conversations()).contains(&"G3"));
}

#[test]
fn group_member_ids_are_deduplicated() {
    let snapshot = workspace().with_group(group("G4", &["U1", "U2", "U1"]));
    let catalog = Catalog::build(&snapshot);
    let g4 = catalog
        .conversations()
        .iter()
        .find(|e| e.id().as_str() == "G4")
        .unwrap();
    assert_eq!(g4.members().len(), 2);
}

#[test]
fn group_without_known_self_keeps_every_member() {
    let snapshot = StateSnapshot::new()
        .with_user(user("U1", "Alice"))
        .with_user(user("U2", "Bob"))
        .with_group(group("G1", &["U1", "U2"]));
    let catalog = Catalog::build(&snapshot);
    assert_eq!(catalog.conversations()[0].label(), "Alice, Bob");
}

// ===== Ordering and identity =====

#[test]
fn conversations_list_dms_before_groups() {
    let catalog = Catalog::build(&workspace());
    assert_eq!(ids(catalog.conversations()), vec!["D1", "D2", "G1"]);
}

#[test]
fn duplicate_ids_keep_first_occurrence() {
    let snapshot = workspace()
        .with_channel(channel("C1", "impostor"))
        .with_dm(dm("C2", "U3"));
    let catalog = Catalog::build(&snapshot);

    assert_eq!(catalog.channels()[0].label(), "general");
    assert_eq!(catalog.len(), 5);
}

#[test]
fn empty_ids_are_skipped() {
    let snapshot = StateSnapshot::new().with_channel(channel("", "nameless"));
    assert!(Catalog::build(&snapshot).is_empty());
}

#[test]
fn initial_listing_shows_channels_then_conversations() {
    let catalog = Catalog::build(&workspace());
    let listing: Vec<&str> = catalog.initial_listing().map(|e| e.id().as_str()).collect();
    assert_eq!(listing, vec!["C1", "C2", "D1", "D2", "G1"]);
}

#[test]
fn from_entities_splits_by_kind() {
    let catalog = Catalog::from_entities([
        Entity::direct(
            EntityId::new("D1").unwrap(),
            "Alice",
            DirectKind::Online,
        ),
        Entity::channel(EntityId::new("C1").unwrap(), "general", false),
    ]);
    assert_eq!(ids(catalog.channels()), vec!["C1"]);
    assert_eq!(ids(catalog.conversations()), vec!["D1"]);
}
