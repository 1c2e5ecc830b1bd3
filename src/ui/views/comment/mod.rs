//! Comment dialog shown before co / ci / mkelem
//!
//! Ctrl+S runs the action with the typed comment; a blank comment is
//! refused and the dialog stays open. Esc cancels it.

mod input;
mod render;

use tui_textarea::TextArea;

use crate::cleartool::CommentArg;
use crate::model::ElementAction;

/// Action returned by the comment dialog after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAction {
    /// Keep editing
    None,
    /// Run the action with the given comment
    Submit(ElementAction, CommentArg),
    /// Close without running anything
    Cancel,
}

/// Comment dialog state
#[derive(Debug, Clone)]
pub struct CommentDialog {
    pub action: ElementAction,
    pub(super) textarea: TextArea<'static>,
}

impl CommentDialog {
    pub fn new(action: ElementAction) -> Self {
        Self {
            action,
            textarea: TextArea::default(),
        }
    }

    /// Current text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }
}
