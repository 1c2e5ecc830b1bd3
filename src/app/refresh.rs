//! Data refresh operations (describe and history from cleartool)
//!
//! cleartool runs on worker threads. Results come back over a channel and
//! are applied on the UI thread by [`App::poll_responses`]. Describe and
//! history requests carry a generation; a response older than the latest
//! request of its kind is dropped, so a slow reply for a previous file never
//! overwrites the current one.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use super::state::App;
use crate::cleartool::{ClearToolError, resolve_element_path};
use crate::model::{Describe, ElementAction, HistoryTree, Notification};

const DESCRIBE_PROGRESS: &str = "Describe...";
const HISTORY_PROGRESS: &str = "Fetching History...";

/// Result of one background cleartool call
#[derive(Debug)]
pub(crate) enum Payload {
    Describe(Result<Describe, ClearToolError>),
    History {
        element: String,
        result: Result<HistoryTree, ClearToolError>,
    },
    Action(ElementAction, Result<String, ClearToolError>),
    Diff(Result<String, ClearToolError>),
}

impl Payload {
    fn kind(&self) -> RequestKind {
        match self {
            Payload::Describe(_) => RequestKind::Describe,
            Payload::History { .. } => RequestKind::History,
            Payload::Action(..) | Payload::Diff(_) => RequestKind::Command,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestKind {
    Describe,
    History,
    /// Actions and diffs; always applied
    Command,
}

#[derive(Debug)]
pub(crate) struct Response {
    generation: u64,
    payload: Payload,
}

/// Worker bookkeeping: channel, generations and in-flight count
#[derive(Debug)]
pub(crate) struct Requests {
    sender: Sender<Response>,
    receiver: Receiver<Response>,
    describe_generation: u64,
    history_generation: u64,
    in_flight: usize,
}

impl Requests {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            describe_generation: 0,
            history_generation: 0,
            in_flight: 0,
        }
    }

    /// Bump the generation of `kind`, turning pending replies stale
    pub(crate) fn invalidate(&mut self, kind: RequestKind) -> u64 {
        match kind {
            RequestKind::Describe => {
                self.describe_generation += 1;
                self.describe_generation
            }
            RequestKind::History => {
                self.history_generation += 1;
                self.history_generation
            }
            RequestKind::Command => 0,
        }
    }

    pub(crate) fn is_current(&self, kind: RequestKind, generation: u64) -> bool {
        match kind {
            RequestKind::Describe => generation == self.describe_generation,
            RequestKind::History => generation == self.history_generation,
            RequestKind::Command => true,
        }
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Run `work` on a worker thread under a fresh generation of `kind`
    pub(crate) fn spawn<F>(&mut self, kind: RequestKind, work: F)
    where
        F: FnOnce() -> Payload + Send + 'static,
    {
        let generation = self.invalidate(kind);
        let sender = self.sender.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let payload = work();
            // Receiver gone means the app has shut down
            let _ = sender.send(Response {
                generation,
                payload,
            });
        });
    }

    fn try_recv(&mut self) -> Option<Response> {
        let response = self.receiver.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(response)
    }

    fn recv_timeout(&mut self, timeout: Duration) -> Option<Response> {
        match self.receiver.recv_timeout(timeout) {
            Ok(response) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(response)
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl App {
    /// Describe the active file in the background
    pub fn request_describe(&mut self) {
        let Some(element) = self.resolved_active_file() else {
            self.describe = Describe::unknown();
            self.requests.invalidate(RequestKind::Describe);
            return;
        };

        self.progress = Some(DESCRIBE_PROGRESS);
        let executor = self.executor.clone();
        self.requests.spawn(RequestKind::Describe, move || {
            Payload::Describe(executor.describe(&element))
        });
    }

    /// Fetch the history of the active file in the background
    pub fn request_history(&mut self) {
        let Some(file) = self.active_file().map(Path::to_path_buf) else {
            self.notify(Notification::warning("No file to fetch history for"));
            return;
        };
        let Some(element) = self.resolved_active_file() else {
            self.forget_history();
            return;
        };

        self.progress = Some(HISTORY_PROGRESS);
        let name = display_name(&file);
        let executor = self.executor.clone();
        self.requests.spawn(RequestKind::History, move || Payload::History {
            element: name,
            result: executor.history(&element),
        });
    }

    /// Describe again, and refetch history when a tree is shown
    pub fn refresh(&mut self) {
        self.request_describe();
        if self.history_view.element().is_some() {
            self.request_history();
        }
    }

    /// Clear the history tree and drop any history reply still in flight
    pub(crate) fn forget_history(&mut self) {
        self.history_view.clear();
        self.requests.invalidate(RequestKind::History);
    }

    /// Apply every response that has arrived; called on each UI tick
    pub fn poll_responses(&mut self) {
        while let Some(response) = self.requests.try_recv() {
            self.apply_response(response);
        }
    }

    /// Block until no request is in flight or `timeout` passes
    ///
    /// Returns `false` on timeout.
    pub fn wait_for_requests(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.requests.in_flight() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.requests.recv_timeout(remaining) {
                Some(response) => self.apply_response(response),
                None => return false,
            }
        }
        true
    }

    /// Element path for cleartool, or `None` after reporting why not
    pub(crate) fn resolved_active_file(&mut self) -> Option<PathBuf> {
        let file = self.active_file()?.to_path_buf();
        match resolve_element_path(&file) {
            Ok(element) => {
                if element != file {
                    self.logger.log(&format!(
                        "symbolic link {} -> {}",
                        file.display(),
                        element.display()
                    ));
                }
                Some(element)
            }
            Err(e) => {
                self.show_error(&e.to_string());
                None
            }
        }
    }

    fn apply_response(&mut self, response: Response) {
        let kind = response.payload.kind();
        if !self.requests.is_current(kind, response.generation) {
            self.logger.log(&format!(
                "dropping stale {:?} response (generation {})",
                kind, response.generation
            ));
        } else {
            match response.payload {
                Payload::Describe(result) => self.apply_describe(result),
                Payload::History { element, result } => self.apply_history(element, result),
                Payload::Action(action, result) => self.finish_action(action, result),
                Payload::Diff(result) => self.finish_diff(result),
            }
        }

        if self.requests.in_flight() == 0 {
            self.progress = None;
        }
    }

    fn apply_describe(&mut self, result: Result<Describe, ClearToolError>) {
        match result {
            Ok(describe) => {
                self.describe = describe;
            }
            Err(e) => {
                self.describe = Describe::unknown();
                self.show_error(&format!("describe failed: {}", e));
            }
        }
    }

    fn apply_history(&mut self, element: String, result: Result<HistoryTree, ClearToolError>) {
        match result {
            Ok(tree) => {
                self.logger.log(&format!(
                    "history of {}: {} nodes",
                    element,
                    tree.len()
                ));
                self.history_view.set_tree(element, tree);
            }
            Err(e) => {
                self.history_view.clear();
                self.show_error(&format!("lshistory failed: {}", e));
            }
        }
    }
}

/// File name shown in the History View title
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
