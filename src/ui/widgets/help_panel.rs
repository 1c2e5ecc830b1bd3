//! Help panel widget
//!
//! Lists every key binding from [`crate::keys`], grouped by section.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys::{self, KeyBindEntry};

const SECTIONS: &[(&str, &[KeyBindEntry])] = &[
    ("Global", keys::GLOBAL_KEYS),
    ("Navigation", keys::NAV_KEYS),
    ("History View", keys::HISTORY_KEYS),
    ("Element Actions", keys::ACTION_KEYS),
    ("Comment Dialog", keys::COMMENT_KEYS),
];

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    for (title, entries) in SECTIONS {
        lines.push(Line::from(format!("{title}:")).underlined());
        for entry in *entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:12}", entry.key),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(entry.description),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Number of help lines, for clamping the scroll offset
pub fn help_line_count() -> usize {
    build_help_lines().len()
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top).
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" cleartui - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
