//! Switcher session state (pure state transitions).
//!
//! Owns the raw query text, the debounce controller, the current results and
//! the focused row. Editing re-arms the debounce timer; navigation and
//! commit/cancel are handled synchronously. All functions take `now`
//! explicitly so the state machine is testable without a terminal or clock.

use std::time::{Duration, Instant};

use tracing::debug;

use super::debounce::Debouncer;
use crate::model::{EntityId, SearchResult, SwitcherAction};
use crate::search::SearchEngine;

/// Default number of rows moved by page navigation.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What the collaborators should do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitcherOutcome {
    /// Nothing beyond a redraw.
    Continue,
    /// A search executed and the result list was replaced.
    Results,
    /// Jump to this conversation.
    Navigate(EntityId),
    /// Close the switcher without navigating.
    Close,
}

/// One open switcher session.
#[derive(Debug, Clone)]
pub struct SwitcherState {
    engine: SearchEngine,
    query: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
    debouncer: Debouncer,
    results: Vec<SearchResult>,
    selected: usize,
    scroll_offset: usize,
    page_size: usize,
}

impl SwitcherState {
    /// Open a session over `engine`, showing the initial listing.
    pub fn new(engine: SearchEngine, quiet_interval: Duration) -> Self {
        let results = engine
            .catalog()
            .initial_listing()
            .map(SearchResult::from)
            .collect();
        Self {
            engine,
            query: String::new(),
            cursor: 0,
            debouncer: Debouncer::new(quiet_interval),
            results,
            selected: 0,
            scroll_offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set how many rows page navigation moves.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Replace the query text and search immediately, bypassing debounce.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self.cursor = self.query.chars().count();
        self.run_search();
        self
    }

    /// Raw query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current result list.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Focused row index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Focused result, if any.
    pub fn selected(&self) -> Option<&SearchResult> {
        self.results.get(self.selected)
    }

    /// First visible row for rendering.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The debounce controller.
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// The search engine backing this session.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Apply a user action at `now`.
    pub fn handle(&mut self, action: SwitcherAction, now: Instant) -> SwitcherOutcome {
        match action {
            SwitcherAction::Insert(ch) => {
                let at = self.byte_offset(self.cursor);
                self.query.insert(at, ch);
                self.cursor += 1;
                self.debouncer.arm(now);
                SwitcherOutcome::Continue
            }
            SwitcherAction::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_offset(self.cursor - 1);
                    self.query.remove(at);
                    self.cursor -= 1;
                    self.debouncer.arm(now);
                }
                SwitcherOutcome::Continue
            }
            SwitcherAction::Delete => {
                if self.cursor < self.query.chars().count() {
                    let at = self.byte_offset(self.cursor);
                    self.query.remove(at);
                    self.debouncer.arm(now);
                }
                SwitcherOutcome::Continue
            }
            SwitcherAction::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                SwitcherOutcome::Continue
            }
            SwitcherAction::CursorRight => {
                self.cursor = (self.cursor + 1).min(self.query.chars().count());
                SwitcherOutcome::Continue
            }
            SwitcherAction::SelectPrev => {
                self.select_by(-1);
                SwitcherOutcome::Continue
            }
            SwitcherAction::SelectNext => {
                self.select_by(1);
                SwitcherOutcome::Continue
            }
            SwitcherAction::PagePrev => {
                self.select_by(-(self.page_size as isize));
                SwitcherOutcome::Continue
            }
            SwitcherAction::PageNext => {
                self.select_by(self.page_size as isize);
                SwitcherOutcome::Continue
            }
            SwitcherAction::Commit => match self.selected() {
                Some(result) => {
                    debug!(id = %result.id, "Switcher commit");
                    SwitcherOutcome::Navigate(result.id.clone())
                }
                None => SwitcherOutcome::Continue,
            },
            SwitcherAction::Cancel => {
                self.debouncer.cancel();
                SwitcherOutcome::Close
            }
        }
    }

    /// Run the pending search if its quiet interval has elapsed at `now`.
    ///
    /// The search reads the query text as it is now, not as it was when the
    /// timer was armed.
    pub fn tick(&mut self, now: Instant) -> SwitcherOutcome {
        if self.debouncer.poll(now) {
            self.run_search();
            SwitcherOutcome::Results
        } else {
            SwitcherOutcome::Continue
        }
    }

    /// Keep the focused row within `visible_rows` of the scroll offset.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected + 1 - visible_rows;
        }
    }

    fn run_search(&mut self) {
        self.results = self.engine.search(&self.query);
        self.selected = 0;
        self.scroll_offset = 0;
    }

    fn select_by(&mut self, delta: isize) {
        let Some(last) = self.results.len().checked_sub(1) else {
            self.selected = 0;
            return;
        };
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map_or(self.query.len(), |(offset, _)| offset)
    }
}

#[cfg(test)]
#[path = "switcher_tests.rs"]
mod tests;
