//! Search execution: index lookups, deduplication and ranking per mode.

use std::collections::HashSet;

use tracing::debug;

use super::catalog::Catalog;
use super::index::{build_label_index, build_member_index, list_contains, PartialMatchIndex};
use super::query::QueryMode;
use crate::model::{Entity, SearchResult, StateSnapshot};

/// Catalog plus the two partial-match indices built over it.
///
/// Built together at session start and read-only afterwards. Index values are
/// positions into the catalog's channel and conversation lists.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Catalog,
    channel_index: PartialMatchIndex<usize>,
    member_index: PartialMatchIndex<usize>,
}

impl SearchEngine {
    /// Index an existing catalog.
    pub fn new(catalog: Catalog) -> Self {
        let channel_index = build_label_index(catalog.channels(), Entity::label, |pos, _| pos);
        let member_index =
            build_member_index(catalog.conversations(), Entity::members, |pos, _| pos);
        Self {
            catalog,
            channel_index,
            member_index,
        }
    }

    /// Build the catalog from a snapshot and index it.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Self {
        Self::new(Catalog::build(snapshot))
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Classify `raw` and run the resulting search.
    pub fn search(&self, raw: &str) -> Vec<SearchResult> {
        self.execute(&QueryMode::classify(raw))
    }

    /// Run a classified search. Never fails; an empty list means no matches.
    pub fn execute(&self, mode: &QueryMode) -> Vec<SearchResult> {
        let hits: Vec<&Entity> = match mode {
            QueryMode::ShowAll => self.catalog.channels().iter().collect(),
            QueryMode::SingleChannel(fragment) => self.channel_hits(fragment),
            QueryMode::SingleUser(fragment) => self.user_hits(fragment),
            QueryMode::MultiUser(fragments) => self.multi_user_hits(fragments),
            QueryMode::Mixed(fragment) => {
                let mut hits = self.channel_hits(fragment);
                hits.extend(self.user_hits(fragment));
                dedup_by_id(hits)
            }
        };

        debug!(mode = mode.name(), results = hits.len(), "Search executed");
        hits.into_iter().map(SearchResult::from).collect()
    }

    /// Channels whose normalized label contains `fragment`, shortest label
    /// first, ties in catalog order.
    fn channel_hits(&self, fragment: &str) -> Vec<&Entity> {
        let mut positions: Vec<usize> = self
            .channel_index
            .get_all(fragment)
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect();
        let channels = self.catalog.channels();
        positions.sort_by_key(|&pos| (channels[pos].label().chars().count(), pos));
        positions.dedup();
        positions.into_iter().map(|pos| &channels[pos]).collect()
    }

    /// Conversations with a member containing `fragment`, deduplicated in
    /// match order, fewest members first.
    fn user_hits(&self, fragment: &str) -> Vec<&Entity> {
        let conversations = self.catalog.conversations();
        let matched = self
            .member_index
            .get_all(fragment)
            .flat_map(move |(_, positions)| {
                positions.iter().map(move |&pos| &conversations[pos])
            });
        let mut hits = dedup_by_id(matched);
        hits.sort_by_key(|entity| entity.members().len());
        hits
    }

    /// Conversations matching the first fragment and containing a member for
    /// every later fragment. No fragments at all matches nothing.
    fn multi_user_hits(&self, fragments: &[String]) -> Vec<&Entity> {
        let Some((first, rest)) = fragments.split_first() else {
            return Vec::new();
        };

        let mut hits = self.user_hits(first);
        for fragment in rest {
            hits.retain(|entity| list_contains(entity.members(), fragment));
        }
        hits
    }
}

/// Keep the first occurrence of each id, preserving order.
fn dedup_by_id<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Vec<&'a Entity> {
    let mut seen = HashSet::new();
    entities
        .into_iter()
        .filter(|&entity| seen.insert(entity.id()))
        .collect()
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod tests;
