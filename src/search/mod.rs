//! Search core (pure).
//!
//! Data flows leaves first:
//! normalize → catalog → index → query classification → execution.
//! Everything here is a total function of its inputs; nothing blocks,
//! performs I/O or fails.

pub mod catalog;
pub mod execute;
pub mod index;
pub mod normalize;
pub mod query;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::Catalog;
pub use execute::SearchEngine;
pub use index::{build_label_index, build_member_index, list_contains, PartialMatchIndex};
pub use normalize::normalize;
pub use query::QueryMode;
