//! Tests for the History View
//!
//! Uses insta + ratatui TestBackend.

use crossterm::event::{KeyCode, KeyEvent};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use cleartui::cleartool::parser::Parser;
use cleartui::model::{HistoryTree, Notification};
use cleartui::ui::views::HistoryView;

use crate::common::{contains, rows};

const HISTORY: &str = r#"2024-06-01T09:00:00 alice checkout version from \main\3
  wip
2024-05-01T10:00:00 alice checkin version "a.c@@\main\3"
2024-04-01T08:00:00 bob mkbranch branch "a.c@@\main\bugfix"
2024-04-02T08:00:00 bob checkin version "a.c@@\main\bugfix\1"
"#;

fn sample_view() -> HistoryView {
    let tree = HistoryTree::from_events(&Parser::parse_history(HISTORY));
    let mut view = HistoryView::new();
    view.set_tree("a.c", tree);
    view
}

fn draw(view: &mut HistoryView, notification: Option<&Notification>) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal
        .draw(|frame| {
            view.render(frame, frame.area(), notification);
        })
        .unwrap();
    terminal
}

#[test]
fn test_history_view_empty() {
    let mut view = HistoryView::new();
    let terminal = draw(&mut view, None);
    let backend = terminal.backend();

    assert!(contains(backend, "History: (no file)"));
    assert!(contains(
        backend,
        "Changes ↓ Press f to fetch history of current file"
    ));
}

#[test]
fn test_history_view_tree() {
    let mut view = sample_view();
    let terminal = draw(&mut view, None);
    let rows = rows(terminal.backend());

    assert!(rows[0].contains("History: a.c"));
    assert!(rows[1].contains("▾ Changes"));
    assert!(rows[2].contains("  ▾ main"));
    assert!(rows[3].contains("3 ✓ checkout version • alice 2024-06-01T09:00:00  ≡wip"));
    assert!(rows[4].contains("3 ⤷ checkin version • alice 2024-05-01T10:00:00"));
    // Inner nodes show no description
    assert!(rows[5].contains("▾ bugfix"));
    assert!(!rows[5].contains("mkbranch"));
    assert!(rows[6].contains("1 ⤷ checkin version • bob"));
}

#[test]
fn test_history_view_collapse_hides_children() {
    let mut view = sample_view();
    // Changes -> main, then collapse main
    view.handle_key(KeyEvent::from(KeyCode::Char('j')));
    view.handle_key(KeyEvent::from(KeyCode::Enter));

    let terminal = draw(&mut view, None);
    let rows = rows(terminal.backend());

    assert!(rows[2].contains("▸ main"));
    assert!(!rows[3].contains("checkout"));
}

#[test]
fn test_history_view_notification_in_title() {
    let mut view = sample_view();
    let notification = Notification::success("Checked out \"a.c\"");
    let terminal = draw(&mut view, Some(&notification));

    assert!(contains(terminal.backend(), "Success: Checked out \"a.c\""));
}

#[test]
fn test_leaf_description() {
    let view = sample_view();
    let tree = view.tree();
    let main = tree.find_child(None, "main").unwrap();
    let leaf = tree[main].children()[0];

    assert_snapshot!(tree[leaf].description(), @"✓ checkout version • alice 2024-06-01T09:00:00  ≡wip");
}
