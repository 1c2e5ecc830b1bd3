//! Rendering logic for the application

use chrono::Utc;
use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::keys::{self, HintContext};
use crate::ui::components;
use crate::ui::widgets::{
    FileStatus, STATUS_BAR_HEIGHT, render_error_banner, render_help_panel, render_status_bar,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.clear_expired_notification();
        let notification = self.notification.clone();

        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(STATUS_BAR_HEIGHT),
            ..area
        };

        match self.current_view {
            View::History if self.files.is_empty() => {
                let block = components::bordered_block_with_notification(
                    Line::from(" History ").bold().cyan(),
                    notification
                        .as_ref()
                        .map(|n| components::build_notification_title(n, None)),
                );
                frame.render_widget(
                    components::empty_state(
                        "No file to show.",
                        Some("Start with: cleartui <FILE>..."),
                    )
                    .block(block),
                    main_area,
                );
            }
            View::History => {
                self.history_view
                    .render(frame, main_area, notification.as_ref());
            }
            View::Help => render_help_panel(frame, main_area, self.help_scroll),
        }

        let ctx = HintContext {
            file_state: self.describe.state,
            dialog_open: self.comment_dialog.is_some(),
        };
        let hints = keys::current_hints(self.current_view, &ctx);
        let status = FileStatus {
            describe: &self.describe,
            progress: self.progress,
            items: self.config.status_bar,
            now: Utc::now(),
        };
        render_status_bar(frame, &status, &hints);

        // Error banner above the status bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, STATUS_BAR_HEIGHT);
        }

        // Dialog on top of everything
        if let Some(ref dialog) = self.comment_dialog {
            dialog.render(frame, area);
        }
    }
}
