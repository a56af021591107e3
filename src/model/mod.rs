//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors.

pub mod entity;
pub mod error;
pub mod key_action;
pub mod snapshot;

// Re-export for convenience
pub use entity::{DirectKind, Entity, EntityId, IconHint, InvalidEntityId, SearchResult};
pub use error::{AppError, SnapshotError};
pub use key_action::SwitcherAction;
pub use snapshot::{
    ChannelRecord, DirectRecord, GroupRecord, SnapshotDocument, StateSnapshot, UserRecord,
    UserResolver, BUILTIN_BOT_ID,
};
