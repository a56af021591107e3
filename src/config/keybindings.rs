//! Keyboard bindings configuration.

use crate::model::key_action::SwitcherAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to switcher actions.
///
/// Printable characters without Ctrl/Alt insert into the query; everything
/// else goes through the binding table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<(KeyCode, KeyModifiers), SwitcherAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<SwitcherAction> {
        if let Some(action) = self.bindings.get(&(key.code, key.modifiers)) {
            return Some(*action);
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(SwitcherAction::Insert(ch))
            }
            _ => None,
        }
    }

    /// Bind (or rebind) a key.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: SwitcherAction) {
        self.bindings.insert((code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Query editing
        bindings.bind(KeyCode::Backspace, KeyModifiers::NONE, SwitcherAction::Backspace);
        bindings.bind(KeyCode::Delete, KeyModifiers::NONE, SwitcherAction::Delete);
        bindings.bind(KeyCode::Left, KeyModifiers::NONE, SwitcherAction::CursorLeft);
        bindings.bind(KeyCode::Right, KeyModifiers::NONE, SwitcherAction::CursorRight);

        // Result navigation
        bindings.bind(KeyCode::Up, KeyModifiers::NONE, SwitcherAction::SelectPrev);
        bindings.bind(KeyCode::Down, KeyModifiers::NONE, SwitcherAction::SelectNext);
        bindings.bind(
            KeyCode::Char('p'),
            KeyModifiers::CONTROL,
            SwitcherAction::SelectPrev,
        );
        bindings.bind(
            KeyCode::Char('n'),
            KeyModifiers::CONTROL,
            SwitcherAction::SelectNext,
        );
        bindings.bind(KeyCode::PageUp, KeyModifiers::NONE, SwitcherAction::PagePrev);
        bindings.bind(KeyCode::PageDown, KeyModifiers::NONE, SwitcherAction::PageNext);

        // Outcomes
        bindings.bind(KeyCode::Enter, KeyModifiers::NONE, SwitcherAction::Commit);
        bindings.bind(KeyCode::Esc, KeyModifiers::NONE, SwitcherAction::Cancel);
        bindings.bind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            SwitcherAction::Cancel,
        );

        bindings
    }
}
