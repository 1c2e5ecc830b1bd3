//! History View key handling

use crossterm::event::KeyEvent;

use super::{HistoryAction, HistoryView};
use crate::keys;

impl HistoryView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> HistoryAction {
        match key.code {
            // Navigation
            k if keys::is_move_down(k) => self.select_next(),
            k if keys::is_move_up(k) => self.select_prev(),
            keys::GO_TOP => self.select_first(),
            keys::GO_BOTTOM => self.select_last(),

            // Tree
            keys::TOGGLE | keys::TOGGLE_SPACE => self.toggle_selected(),
            keys::EXPAND => self.expand_selected(),
            keys::COLLAPSE => self.collapse_selected(),

            keys::FETCH_HISTORY => return HistoryAction::Fetch,

            _ => {}
        }
        HistoryAction::None
    }
}
