//! UI symbols (markers, glyphs, etc.)
//!
//! Tree glyphs themselves live on [`crate::model::Glyph`]; this module holds
//! the decoration around them.

/// Tree markers in History View
pub mod tree {
    /// Expanded node (▾)
    pub const EXPANDED: char = '▾';
    /// Collapsed node (▸)
    pub const COLLAPSED: char = '▸';
    /// Leaf node, no marker
    pub const LEAF: char = ' ';
    /// Indentation per depth level
    pub const INDENT: &str = "  ";
}

/// Status bar glyphs
pub mod status {
    /// Branch marker in front of the version (⎇)
    pub const BRANCH: char = '⎇';
    /// Marker in front of file info for view-private files (⏚)
    pub const EARTH_GROUND: char = '⏚';
    /// Fetch hint (↓)
    pub const DOWNWARDS_ARROW: char = '↓';
}

/// Labels shown when there is nothing to display
pub mod empty {
    /// Root label of the history tree
    pub const CHANGES: &str = "Changes";
    /// Hint under an empty history tree
    pub const FETCH_HINT: &str = "Press f to fetch history of current file";
    /// View status when the file has no version
    pub const NO_VERSION: &str = "No Version";
    /// Title when no file was given on the command line
    pub const NO_FILE: &str = "(no file)";
}
