//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, View};
use crate::keys;
use crate::model::ElementAction;
use crate::ui::views::{CommentAction, HistoryAction};
use crate::ui::widgets::help_line_count;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // The comment dialog captures every key while open
        if let Some(ref mut dialog) = self.comment_dialog {
            let action = dialog.handle_key(key);
            self.handle_comment_action(action);
            return;
        }

        // Clear error message on any key press
        self.error_message = None;

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        if keys::is_refresh_key(&key) {
            self.refresh();
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.go_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB | keys::NEXT_FILE => {
                self.next_file();
                true
            }
            keys::PREV_FILE => {
                self.prev_file();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::History {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::History => self.handle_history_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        let action = match key.code {
            keys::CHECKOUT => Some(ElementAction::Checkout),
            keys::CHECKIN => Some(ElementAction::Checkin),
            keys::UNDO_CHECKOUT => Some(ElementAction::UndoCheckout),
            keys::MAKE_ELEMENT => Some(ElementAction::MakeElement),
            _ => None,
        };
        if let Some(action) = action {
            self.start_action(action);
            return;
        }

        if key.code == keys::DIFF {
            self.diff_predecessor();
            return;
        }

        match self.history_view.handle_key(key) {
            HistoryAction::None => {}
            HistoryAction::Fetch => self.request_history(),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let max = help_line_count().saturating_sub(1) as u16;
        match key.code {
            k if keys::is_move_down(k) => {
                self.help_scroll = self.help_scroll.saturating_add(1).min(max);
            }
            k if keys::is_move_up(k) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            keys::GO_TOP => self.help_scroll = 0,
            keys::GO_BOTTOM => self.help_scroll = max,
            _ => {}
        }
    }

    fn handle_comment_action(&mut self, action: CommentAction) {
        match action {
            CommentAction::None => {}
            CommentAction::Cancel => {
                self.comment_dialog = None;
            }
            CommentAction::Submit(action, comment) => {
                self.comment_dialog = None;
                self.run_action(action, comment);
            }
        }
    }
}
