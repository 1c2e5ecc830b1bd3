//! Application state and view management

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::refresh::Requests;
use crate::cleartool::ClearToolExecutor;
use crate::config::Config;
use crate::logging::Logger;
use crate::model::{Describe, Notification};
use crate::ui::views::{CommentDialog, HistoryView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    History,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// History view state
    pub history_view: HistoryView,
    /// Files given on the command line
    pub(crate) files: Vec<PathBuf>,
    /// Index of the active file in `files`
    pub(crate) active: usize,
    pub(crate) executor: ClearToolExecutor,
    pub(crate) logger: Arc<dyn Logger>,
    pub config: Config,
    /// Last describe result of the active file
    pub describe: Describe,
    /// Progress text while cleartool runs
    pub progress: Option<&'static str>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Comment dialog (blocks other input when Some)
    pub comment_dialog: Option<CommentDialog>,
    pub(crate) help_scroll: u16,
    pub(crate) requests: Requests,
}

impl App {
    /// Construct a new instance of [`App`] and describe the first file.
    pub fn new(
        files: Vec<PathBuf>,
        executor: ClearToolExecutor,
        logger: Arc<dyn Logger>,
        config: Config,
    ) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::History,
            history_view: HistoryView::new(),
            files,
            active: 0,
            executor,
            logger,
            config,
            describe: Describe::unknown(),
            progress: None,
            error_message: None,
            notification: None,
            comment_dialog: None,
            help_scroll: 0,
            requests: Requests::new(),
        };

        app.request_describe();

        app
    }

    /// File all commands act on
    pub fn active_file(&self) -> Option<&Path> {
        self.files.get(self.active).map(PathBuf::as_path)
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Switch to the next file (wrapping)
    pub(crate) fn next_file(&mut self) {
        if self.files.len() > 1 {
            self.switch_file((self.active + 1) % self.files.len());
        }
    }

    /// Switch to the previous file (wrapping)
    pub(crate) fn prev_file(&mut self) {
        if self.files.len() > 1 {
            let count = self.files.len();
            self.switch_file((self.active + count - 1) % count);
        }
    }

    fn switch_file(&mut self, index: usize) {
        self.active = index;
        self.describe = Describe::unknown();
        self.forget_history();
        self.request_describe();
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.current_view = view;
            self.help_scroll = 0;
        }
    }

    /// Back to the History View
    pub(crate) fn go_back(&mut self) {
        self.current_view = View::History;
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
