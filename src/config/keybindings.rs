//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Character keys are looked up without their SHIFT modifier, since
/// terminals disagree on whether `G` or `+` arrive with SHIFT set.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(normalize(key), action);
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Drop event kind/state and SHIFT on character keys.
fn normalize(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.bind(KeyEvent::new(code, modifiers), action);
        };
        let none = KeyModifiers::NONE;

        // Page navigation
        bind(KeyCode::Home, none, KeyAction::FirstPage);
        bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        bind(KeyCode::Left, none, KeyAction::PrevPage);
        bind(KeyCode::Char('p'), none, KeyAction::PrevPage);
        bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        bind(KeyCode::Right, none, KeyAction::NextPage);
        bind(KeyCode::Char('n'), none, KeyAction::NextPage);
        bind(KeyCode::PageDown, none, KeyAction::NextPage);
        bind(KeyCode::End, none, KeyAction::LastPage);
        bind(KeyCode::Char('G'), none, KeyAction::LastPage);
        bind(KeyCode::Char(':'), none, KeyAction::GoToPage);

        // Page size
        bind(KeyCode::Char('+'), none, KeyAction::NextPageSize);
        bind(KeyCode::Char('='), none, KeyAction::NextPageSize);
        bind(KeyCode::Char('-'), none, KeyAction::PrevPageSize);

        // Column cursor and sorting
        bind(KeyCode::Tab, none, KeyAction::NextColumn);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevColumn);
        bind(KeyCode::BackTab, none, KeyAction::PrevColumn);
        bind(KeyCode::Char('s'), none, KeyAction::CycleSort);
        bind(KeyCode::Enter, none, KeyAction::CycleSort);

        // Filter
        bind(KeyCode::Char('/'), none, KeyAction::StartFilter);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartFilter);
        bind(KeyCode::Char('c'), none, KeyAction::ClearFilter);

        // View mode
        bind(KeyCode::Char('v'), none, KeyAction::ToggleMode);
        bind(KeyCode::Char('1'), none, KeyAction::ShowGrid);
        bind(KeyCode::Char('2'), none, KeyAction::ShowTiles);

        // Tile scrolling
        bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        bind(KeyCode::Up, none, KeyAction::ScrollUp);
        bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        bind(KeyCode::Down, none, KeyAction::ScrollDown);

        // Application controls
        bind(KeyCode::Char('?'), none, KeyAction::Help);
        bind(KeyCode::Char('q'), none, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        bindings
    }
}
