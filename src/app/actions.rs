//! Element actions (co / ci / unco / mkelem / diff) and user feedback

use super::refresh::{Payload, RequestKind};
use super::state::App;
use crate::cleartool::{ClearToolError, CommentArg};
use crate::model::{ElementAction, Notification, NotificationKind};
use crate::ui::views::CommentDialog;

const DIFF_PROGRESS: &str = "Comparing...";

impl App {
    /// Start `action` on the active file
    ///
    /// Actions the file state does not allow are refused with a warning.
    /// Commented actions open the comment dialog unless it is disabled in
    /// the config, in which case they run with `-nc`.
    pub fn start_action(&mut self, action: ElementAction) {
        if self.active_file().is_none() {
            self.notify(Notification::warning("No file to act on"));
            return;
        }

        let state = self.describe.state;
        if !state.allows(action) {
            self.notify(Notification::warning(format!(
                "{} is not available ({})",
                action.title(),
                state.label()
            )));
            return;
        }

        if action.takes_comment() && self.config.action_comment_dialog {
            self.comment_dialog = Some(CommentDialog::new(action));
        } else {
            self.run_action(action, CommentArg::NoComment);
        }
    }

    /// Run `action` in the background with the given comment
    pub fn run_action(&mut self, action: ElementAction, comment: CommentArg) {
        let Some(element) = self.resolved_active_file() else {
            return;
        };

        self.progress = Some(action.progress_label());
        let executor = self.executor.clone();
        self.requests.spawn(RequestKind::Command, move || {
            let result = match action {
                ElementAction::Checkout => executor.checkout(&element, &comment),
                ElementAction::Checkin => executor.checkin(&element, &comment),
                ElementAction::UndoCheckout => executor.uncheckout(&element),
                ElementAction::MakeElement => executor.make_element(&element, &comment),
            };
            Payload::Action(action, result)
        });
    }

    /// Compare the active file with its predecessor version
    pub fn diff_predecessor(&mut self) {
        let Some(element) = self.resolved_active_file() else {
            return;
        };

        self.progress = Some(DIFF_PROGRESS);
        let executor = self.executor.clone();
        self.requests.spawn(RequestKind::Command, move || {
            Payload::Diff(executor.diff_predecessor(&element))
        });
    }

    pub(crate) fn finish_action(
        &mut self,
        action: ElementAction,
        result: Result<String, ClearToolError>,
    ) {
        match result {
            Ok(output) => {
                self.notify(Notification::from_output(&output, action.title()));
                self.refresh();
            }
            Err(e) => {
                self.show_error(&format!("{} failed: {}", action.title(), e));
            }
        }
    }

    pub(crate) fn finish_diff(&mut self, result: Result<String, ClearToolError>) {
        match result {
            Ok(output) => {
                self.logger.log(&output);
                self.notify(Notification::from_output(
                    &output,
                    "No differences from predecessor",
                ));
            }
            Err(e) => self.show_error(&format!("diff failed: {}", e)),
        }
    }

    /// Log a message and show it unless information messages are disabled
    ///
    /// Warnings are always shown.
    pub(crate) fn notify(&mut self, notification: Notification) {
        self.logger.log(&notification.message);
        let shown = notification.kind == NotificationKind::Warning
            || self.config.show_information_messages;
        if shown {
            self.notification = Some(notification);
        }
    }

    /// Log an error and show the error banner unless disabled
    pub(crate) fn show_error(&mut self, message: &str) {
        self.logger.log(&format!("error: {}", message));
        if self.config.show_error_messages {
            self.error_message = Some(message.to_string());
        }
    }
}
