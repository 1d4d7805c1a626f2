//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Browser Commands
//!
//! Each key the browser reacts to maps to exactly one `Action`. Keys with no
//! mapping produce `None` and must not trigger a redraw.

use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move selection up.
    MoveSelectionUp,

    /// Move selection down.
    MoveSelectionDown,

    /// Enter the selected directory.
    EnterSelected,

    /// Delete the selected entry.
    Delete,

    /// Stage the selected file for copy.
    Copy,

    /// Stage the selected file for cut.
    Cut,

    /// Paste the staged file into the current directory.
    Paste,

    ToggleHidden,

    /// Quit the application.
    Quit,
}

impl Action {
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Self::Quit),

            (KeyCode::Up, _) => Some(Self::MoveSelectionUp),
            (KeyCode::Down, _) => Some(Self::MoveSelectionDown),
            (KeyCode::Enter, _) => Some(Self::EnterSelected),

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => match c {
                'q' => Some(Self::Quit),
                'd' => Some(Self::Delete),
                'c' => Some(Self::Copy),
                'x' => Some(Self::Cut),
                'v' => Some(Self::Paste),
                'h' => Some(Self::ToggleHidden),
                _ => None,
            },

            _ => None,
        }
    }

    /// Resize, mouse and focus events are ignored.
    pub fn from_terminal_event(event: &TerminalEvent) -> Option<Self> {
        match event {
            TerminalEvent::Key(key) => Self::from_key_event(*key),
            _ => None,
        }
    }
}
