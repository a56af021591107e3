//! Quick switcher for chat workspaces.
//!
//! Incremental search over channels, direct messages and group
//! conversations, following the Pure Core / Impure Shell architecture:
//! `search` and `state` are pure, `source` and `view` touch the outside
//! world.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod source;
pub mod state;
pub mod view;
