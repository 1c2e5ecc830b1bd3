//! View components
//!
//! Each view represents a screen or overlay in the application.

mod comment;
mod history;

pub use comment::{CommentAction, CommentDialog};
pub use history::{HistoryAction, HistoryRow, HistoryView};
