//! cleartool-specific constants
//!
//! Centralized definitions for cleartool command names, flags, and the
//! literal markers scraped from its output.

/// Default cleartool binary name
pub const CLEARTOOL_COMMAND: &str = "cleartool";

/// cleartool subcommands
pub mod commands {
    pub const DESCRIBE: &str = "describe";
    pub const LSHISTORY: &str = "lshistory";
    pub const CHECKOUT: &str = "co";
    pub const CHECKIN: &str = "ci";
    pub const UNCHECKOUT: &str = "unco";
    pub const MKELEM: &str = "mkelem";
    pub const DIFF: &str = "diff";
}

/// cleartool command flags
pub mod flags {
    /// Attach a comment to the operation
    pub const COMMENT: &str = "-c";
    /// Run the operation without a comment
    pub const NO_COMMENT: &str = "-nc";
    /// Remove the checked-out copy on uncheckout
    pub const REMOVE: &str = "-rm";
    /// Compare against the predecessor version
    pub const PREDECESSOR: &str = "-pred";
}

/// History operation verbs and element kinds
pub mod history {
    /// Operation verb of a checkout record
    pub const CHECKOUT: &str = "checkout";
    /// Kind of a version record
    pub const KIND_VERSION: &str = "version";
    /// Kind of a branch record
    pub const KIND_BRANCH: &str = "branch";
}

/// Literal markers in cleartool output
pub mod markers {
    /// Present in `describe` output of a checked-out version
    pub const CHECKEDOUT: &str = "CHECKEDOUT";
    /// Separator between branch and version path segments
    pub const PATH_SEPARATOR: char = '\\';
    /// Leading indentation of a history comment line
    pub const COMMENT_INDENT: &str = "  ";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleartool_command_name() {
        assert_eq!(CLEARTOOL_COMMAND, "cleartool");
    }

    #[test]
    fn test_comment_indent_is_two_spaces() {
        assert_eq!(markers::COMMENT_INDENT.len(), 2);
        assert!(markers::COMMENT_INDENT.chars().all(|c| c == ' '));
    }

    #[test]
    fn test_comment_flags_format() {
        assert!(flags::COMMENT.starts_with('-'));
        assert!(flags::NO_COMMENT.starts_with('-'));
    }
}
