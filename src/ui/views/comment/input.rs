//! Comment dialog key handling

use crossterm::event::KeyEvent;

use super::{CommentAction, CommentDialog};
use crate::cleartool::CommentArg;
use crate::keys;

impl CommentDialog {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> CommentAction {
        // A blank comment cannot be submitted; the dialog stays open
        if keys::is_submit_key(&key) {
            return match CommentArg::from_input(&self.text()) {
                Some(comment) => CommentAction::Submit(self.action, comment),
                None => CommentAction::None,
            };
        }

        if key.code == keys::ESC {
            return CommentAction::Cancel;
        }

        // Everything else edits the text (Enter = newline)
        self.textarea.input(key);
        CommentAction::None
    }
}
