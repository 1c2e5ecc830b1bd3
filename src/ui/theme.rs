//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for History View
pub mod history_view {
    use super::*;

    /// "Changes" root label
    pub const ROOT: Color = Color::Cyan;
    /// Branch / version label
    pub const LABEL: Color = Color::Yellow;
    /// Node description
    pub const DESCRIPTION: Color = Color::Reset;
    /// Comment part of the description
    pub const COMMENT: Color = Color::DarkGray;
    /// Expand/collapse marker
    pub const MARKER: Color = Color::Blue;
}

/// Colors for the file status segment of the status bar
pub mod file_status {
    use super::*;

    /// View status (version) badge
    pub const VIEW_STATUS: Color = Color::Blue;
    /// File info (user and age)
    pub const FILE_INFO: Color = Color::Gray;
    /// Checked out
    pub const CHECKED_OUT: Color = Color::Green;
    /// Locked
    pub const LOCKED: Color = Color::Yellow;
    /// View-private
    pub const PRIVATE: Color = Color::Magenta;
    /// Describe failed
    pub const ERROR: Color = Color::Red;
    /// Progress text while cleartool runs
    pub const PROGRESS: Color = Color::Cyan;
}

/// Colors for selected rows
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}
