//! Data models for cleartui
//!
//! This module contains UI-independent data structures representing
//! ClearCase concepts like element state and version history.

mod describe;
mod history;
mod notification;
mod timestamp;

pub use describe::{Describe, ElementAction, FileState};
pub use history::{Glyph, HistoryEvent, HistoryNode, HistoryTree, NodeId};
pub use notification::{Notification, NotificationKind};
pub use timestamp::{parse_timestamp, relative_time};
