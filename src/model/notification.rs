//! Notification model
//!
//! Used for displaying temporary feedback messages (cleartool action results, etc.)

use std::time::{Duration, Instant};

/// How long a notification stays on screen
const LIFETIME: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Success - action completed (green)
    Success,
    /// Info - informational message (cyan)
    Info,
    /// Warning - caution message (yellow)
    Warning,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was created
    pub created_at: Instant,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Success notification summarizing multi-line cleartool output
    ///
    /// Keeps the first non-blank line; falls back to `fallback` when the
    /// command printed nothing.
    pub fn from_output(output: &str, fallback: &str) -> Self {
        let message = output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or(fallback);
        Self::success(message)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= LIFETIME
    }
}
