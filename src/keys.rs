//! Keybinding definitions for cleartui
//!
//! All keybindings are defined here so views and the help panel agree.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;
use crate::model::FileState;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+S (submit comment dialog)
pub fn is_submit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Back to previous view
pub const ESC: KeyCode = KeyCode::Esc;

/// Next file
pub const TAB: KeyCode = KeyCode::Tab;

/// Next file (alternative)
pub const NEXT_FILE: KeyCode = KeyCode::Char(']');

/// Previous file
pub const PREV_FILE: KeyCode = KeyCode::Char('[');

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// History View keys
// =============================================================================

/// Toggle expand/collapse of the selected node
pub const TOGGLE: KeyCode = KeyCode::Enter;

/// Toggle expand/collapse (alternative)
pub const TOGGLE_SPACE: KeyCode = KeyCode::Char(' ');

/// Collapse the selected node
pub const COLLAPSE: KeyCode = KeyCode::Char('h');

/// Expand the selected node
pub const EXPAND: KeyCode = KeyCode::Char('l');

/// Fetch the history of the active file
pub const FETCH_HISTORY: KeyCode = KeyCode::Char('f');

// =============================================================================
// Element actions
// =============================================================================

/// Check out the active file
pub const CHECKOUT: KeyCode = KeyCode::Char('o');

/// Check in the active file
pub const CHECKIN: KeyCode = KeyCode::Char('i');

/// Undo the checkout of the active file
pub const UNDO_CHECKOUT: KeyCode = KeyCode::Char('u');

/// Add the active view-private file to source control
pub const MAKE_ELEMENT: KeyCode = KeyCode::Char('m');

/// Compare the active file with its predecessor
pub const DIFF: KeyCode = KeyCode::Char('d');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "Tab / ]",
        description: "Next file",
    },
    KeyBindEntry {
        key: "[",
        description: "Previous file",
    },
    KeyBindEntry {
        key: "Ctrl+l",
        description: "Describe file again",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

/// History view key bindings for help display
pub const HISTORY_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "f",
        description: "Fetch history of current file",
    },
    KeyBindEntry {
        key: "Enter/Space",
        description: "Expand / collapse",
    },
    KeyBindEntry {
        key: "h/l",
        description: "Collapse / expand",
    },
];

/// Element action key bindings for help display
pub const ACTION_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "o",
        description: "Check out (locked files)",
    },
    KeyBindEntry {
        key: "i",
        description: "Check in (checked-out files)",
    },
    KeyBindEntry {
        key: "u",
        description: "Undo check out (checked-out files)",
    },
    KeyBindEntry {
        key: "m",
        description: "Make element (private files)",
    },
    KeyBindEntry {
        key: "d",
        description: "Compare with predecessor",
    },
];

/// Comment dialog key bindings for help display
pub const COMMENT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Ctrl+s",
        description: "Run with comment (cannot be empty)",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Cancel",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};
pub const HINT_FETCH: KeyHint = KeyHint {
    key: "f",
    label: "History",
    color: Color::Green,
};
pub const HINT_CHECKOUT: KeyHint = KeyHint {
    key: "o",
    label: "Check Out",
    color: Color::Yellow,
};
pub const HINT_CHECKIN: KeyHint = KeyHint {
    key: "i",
    label: "Check In",
    color: Color::Yellow,
};
pub const HINT_UNDO_CHECKOUT: KeyHint = KeyHint {
    key: "u",
    label: "Undo Co",
    color: Color::Yellow,
};
pub const HINT_MAKE_ELEMENT: KeyHint = KeyHint {
    key: "m",
    label: "Mkelem",
    color: Color::Yellow,
};
pub const HINT_DIFF: KeyHint = KeyHint {
    key: "d",
    label: "Diff",
    color: Color::Magenta,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "^S",
    label: "Submit",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

/// Context for dynamic hint selection
#[derive(Debug, Default)]
pub struct HintContext {
    /// State of the active file
    pub file_state: FileState,
    /// Comment dialog is open
    pub dialog_open: bool,
}

/// Get the hints for the current context.
///
/// Priority: dialog > view. Action hints follow the file state.
pub fn current_hints(view: View, ctx: &HintContext) -> Vec<KeyHint> {
    if ctx.dialog_open {
        return vec![HINT_SUBMIT, HINT_CANCEL];
    }
    match view {
        View::History => history_hints(ctx),
        View::Help => vec![HINT_BACK],
    }
}

fn history_hints(ctx: &HintContext) -> Vec<KeyHint> {
    let mut h = vec![HINT_HELP, HINT_FETCH];
    match ctx.file_state {
        FileState::Locked => h.extend([HINT_CHECKOUT, HINT_DIFF]),
        FileState::CheckedOut => h.extend([HINT_CHECKIN, HINT_UNDO_CHECKOUT, HINT_DIFF]),
        FileState::Private => h.push(HINT_MAKE_ELEMENT),
        FileState::Unknown => {}
    }
    h.push(HINT_QUIT);
    h
}
