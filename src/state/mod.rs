//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod debounce;
pub mod switcher;

// Re-export for convenience
pub use debounce::{DebounceState, Debouncer, TimerToken, DEFAULT_QUIET_INTERVAL};
pub use switcher::{SwitcherOutcome, SwitcherState, DEFAULT_PAGE_SIZE};
