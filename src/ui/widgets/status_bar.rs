//! Status bar widget
//!
//! Two rows at the bottom of the screen: the file status of the active
//! element, then the key hints.

use chrono::{DateTime, Utc};
use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::config::StatusBarConfig;
use crate::keys::KeyHint;
use crate::model::{Describe, FileState, relative_time};
use crate::ui::{symbols, theme};

/// Rows taken by the status bar
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Input for the file status row
#[derive(Debug, Clone, Copy)]
pub struct FileStatus<'a> {
    pub describe: &'a Describe,
    /// Replaces the file state item while cleartool runs
    pub progress: Option<&'a str>,
    pub items: StatusBarConfig,
    pub now: DateTime<Utc>,
}

/// `⎇ <version>` or `⎇ No Version`
pub fn view_status_text(describe: &Describe) -> String {
    let version = match describe.state {
        FileState::Locked | FileState::CheckedOut => describe.version.as_deref(),
        FileState::Private | FileState::Unknown => None,
    };
    format!(
        "{} {}",
        symbols::status::BRANCH,
        version.unwrap_or(symbols::empty::NO_VERSION)
    )
}

/// Owner and age of the file; `None` when describe failed
pub fn file_info_text(describe: &Describe, now: DateTime<Utc>) -> Option<String> {
    let age = relative_time(describe.since.as_deref().unwrap_or_default(), now);
    match describe.state {
        FileState::Locked | FileState::CheckedOut => Some(format!(
            "{} {}",
            describe.user.as_deref().unwrap_or(" "),
            age
        )),
        FileState::Private => Some(format!("{} -- {}", symbols::status::EARTH_GROUND, age)),
        FileState::Unknown => None,
    }
}

fn file_state_color(state: FileState) -> Color {
    match state {
        FileState::Locked => theme::file_status::LOCKED,
        FileState::CheckedOut => theme::file_status::CHECKED_OUT,
        FileState::Private => theme::file_status::PRIVATE,
        FileState::Unknown => theme::file_status::ERROR,
    }
}

/// Build the file status row; each item can be switched off in the config
pub fn build_file_status_line(status: &FileStatus<'_>) -> Line<'static> {
    let mut spans = Vec::new();

    if status.items.show_view_status {
        spans.push(Span::styled(
            format!(" {} ", view_status_text(status.describe)),
            Style::default()
                .fg(Color::Black)
                .bg(theme::file_status::VIEW_STATUS),
        ));
    }

    if status.items.show_file_info
        && let Some(info) = file_info_text(status.describe, status.now)
    {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            info,
            Style::default().fg(theme::file_status::FILE_INFO),
        ));
    }

    if let Some(progress) = status.progress {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            progress.to_string(),
            Style::default()
                .fg(theme::file_status::PROGRESS)
                .add_modifier(Modifier::ITALIC),
        ));
    } else if status.items.show_file_state {
        let state = status.describe.state;
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", state.label()),
            Style::default().fg(Color::Black).bg(file_state_color(state)),
        ));
    }

    Line::from(spans)
}

/// Build a status bar line from key hints
pub fn build_hints_line(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height <= STATUS_BAR_HEIGHT {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - STATUS_BAR_HEIGHT,
        width: area.width,
        height: STATUS_BAR_HEIGHT,
    })
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, status: &FileStatus<'_>, hints: &[KeyHint]) {
    let Some(area) = status_bar_area(frame) else {
        return;
    };

    let lines = vec![build_file_status_line(status), build_hints_line(hints)];
    frame.render_widget(Paragraph::new(lines), area);
}
