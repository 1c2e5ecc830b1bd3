//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state display
///
/// `hint` is rendered in gray under the title.
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}
