//! Tests for the Help panel
//!
//! Uses ratatui TestBackend and reads the rendered cells.

use ratatui::{Terminal, backend::TestBackend};

use cleartui::ui::widgets::{help_line_count, render_help_panel};

use crate::common::{contains, rows};

#[test]
fn test_help_panel_lists_sections() {
    let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 0);
        })
        .unwrap();

    let backend = terminal.backend();
    assert!(contains(backend, "cleartui - Help"));
    for section in ["Global:", "Navigation:", "History View:", "Element Actions:", "Comment Dialog:"] {
        assert!(contains(backend, section), "missing section {}", section);
    }
    assert!(contains(backend, "Fetch history of current file"));
}

#[test]
fn test_help_panel_scroll_hides_header() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), 2);
        })
        .unwrap();

    let rows = rows(terminal.backend());
    assert!(!rows.iter().any(|row| row.contains("Key bindings:")));
    // First content row (inside the border) is the first section title
    assert!(rows[1].contains("Global:"));
}

#[test]
fn test_help_line_count_covers_every_binding() {
    assert!(help_line_count() > 20);
}
