//! Domain-level switcher actions independent of key bindings.

/// User intents the switcher understands.
///
/// These represent intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `SwitcherAction` is handled by
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitcherAction {
    // Query editing (re-arms the debounce timer)
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor. Default: Backspace
    Backspace,
    /// Delete the character under the cursor. Default: Delete
    Delete,
    /// Move the cursor one character left. Default: ←
    CursorLeft,
    /// Move the cursor one character right. Default: →
    CursorRight,

    // Result navigation (synchronous, bypasses debounce)
    /// Focus the previous result. Default: ↑/Ctrl+p
    SelectPrev,
    /// Focus the next result. Default: ↓/Ctrl+n
    SelectNext,
    /// Move focus up by one page. Default: Page Up
    PagePrev,
    /// Move focus down by one page. Default: Page Down
    PageNext,

    // Outcomes
    /// Jump to the focused conversation. Default: Enter
    Commit,
    /// Close the switcher. Default: Esc/Ctrl+c
    Cancel,
}

impl SwitcherAction {
    /// Whether this action edits the query text.
    pub fn edits_query(self) -> bool {
        matches!(
            self,
            SwitcherAction::Insert(_) | SwitcherAction::Backspace | SwitcherAction::Delete
        )
    }
}
