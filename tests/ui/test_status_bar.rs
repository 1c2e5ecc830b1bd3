//! Tests for the status bar and the full application frame
//!
//! Uses insta + ratatui TestBackend.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use cleartui::app::App;
use cleartui::cleartool::ClearToolExecutor;
use cleartui::config::{Config, StatusBarConfig};
use cleartui::keys::{HintContext, current_hints};
use cleartui::logging::RecordingLogger;
use cleartui::model::{Describe, FileState};
use cleartui::ui::widgets::{FileStatus, file_info_text, render_status_bar, view_status_text};

use crate::common::{contains, rows};

fn locked() -> Describe {
    Describe {
        state: FileState::Locked,
        version: Some("main\\bugfix\\3".to_string()),
        user: Some("bob".to_string()),
        since: Some("2024-05-31T12:00:00".to_string()),
    }
}

fn draw_status_bar(status: &FileStatus<'_>, ctx: &HintContext) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 4)).unwrap();
    let hints = current_hints(cleartui::app::View::History, ctx);
    terminal
        .draw(|frame| render_status_bar(frame, status, &hints))
        .unwrap();
    terminal
}

#[test]
fn test_status_texts() {
    let describe = locked();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    assert_snapshot!(view_status_text(&describe), @r"⎇ main\bugfix\3");
    assert_snapshot!(file_info_text(&describe, now).unwrap(), @"bob ~1 days ago");
}

#[test]
fn test_status_bar_locked_file() {
    let describe = locked();
    let status = FileStatus {
        describe: &describe,
        progress: None,
        items: StatusBarConfig::default(),
        now: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    };
    let ctx = HintContext {
        file_state: FileState::Locked,
        dialog_open: false,
    };
    let terminal = draw_status_bar(&status, &ctx);
    let rows = rows(terminal.backend());

    // Status bar occupies the bottom two rows
    assert!(rows[0].is_empty());
    assert!(rows[2].contains("⎇ main\\bugfix\\3"));
    assert!(rows[2].contains("bob ~1 days ago"));
    assert!(rows[2].contains("Locked"));
    assert!(rows[3].contains("[o] Check Out"));
    assert!(!rows[3].contains("[i] Check In"));
}

#[test]
fn test_status_bar_progress() {
    let describe = locked();
    let status = FileStatus {
        describe: &describe,
        progress: Some("Fetching History..."),
        items: StatusBarConfig::default(),
        now: Utc::now(),
    };
    let terminal = draw_status_bar(&status, &HintContext::default());

    assert!(contains(terminal.backend(), "Fetching History..."));
    assert!(!contains(terminal.backend(), "Locked"));
}

#[test]
fn test_status_bar_too_small_is_skipped() {
    let describe = locked();
    let status = FileStatus {
        describe: &describe,
        progress: None,
        items: StatusBarConfig::default(),
        now: Utc::now(),
    };
    let hints = current_hints(cleartui::app::View::History, &HintContext::default());
    let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
    terminal
        .draw(|frame| render_status_bar(frame, &status, &hints))
        .unwrap();

    assert!(rows(terminal.backend()).iter().all(|row| row.is_empty()));
}

fn app_without_files() -> App {
    let logger = Arc::new(RecordingLogger::default());
    let executor = ClearToolExecutor::with_program("cleartool", logger.clone());
    App::new(Vec::new(), executor, logger, Config::default())
}

#[test]
fn test_app_without_files() {
    let mut app = app_without_files();
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let backend = terminal.backend();

    assert!(contains(backend, "No file to show."));
    assert!(contains(backend, "Start with: cleartui <FILE>..."));
    assert!(contains(backend, "⎇ No Version"));
    assert!(contains(backend, "[f] History"));
}

#[test]
fn test_app_warning_when_acting_without_file() {
    let mut app = app_without_files();
    app.on_key_event(KeyEvent::from(KeyCode::Char('o')));

    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    assert!(contains(terminal.backend(), "Warning: No file to act on"));
}

#[test]
fn test_app_help_view() {
    let mut app = app_without_files();
    app.on_key_event(KeyEvent::from(KeyCode::Char('?')));

    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let backend = terminal.backend();

    assert!(contains(backend, "cleartui - Help"));
    assert!(contains(backend, "[q] Back"));
}
