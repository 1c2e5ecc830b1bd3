//! cleartool output parser
//!
//! Parses the free-form text output of cleartool commands into structured
//! data. Every pattern lives behind a named extraction function so it can be
//! tested on its own; the text format varies between cleartool releases.

mod describe;
mod history;


use regex::Regex;
use std::sync::LazyLock;

/// Branch/version path inside a history record
///
/// Matches the run of word characters and backslashes that follows either a
/// version-extended name marker (`@@\`) or a branch origin (`from \`).
/// Example: `"foo.c@@\main\bugfix\3"` or `from \main\3`
static VERSION_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:@@\\|from\s\\)([\w\\]*)").expect("Invalid version path regex")
});

/// Bare file name of an element-creation header
///
/// Example: `create file element ".\foo.c@@"` yields `foo.c`
static ELEMENT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""\.\\(.+)@@""#).expect("Invalid element name regex"));

/// Quoted version-extended name in `describe` output
///
/// Example: `version "foo.c@@\main\CHECKEDOUT"` yields `main\CHECKEDOUT`
static DESCRIBE_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@@\\([^"]+)""#).expect("Invalid describe version regex"));

/// User name inside `(user.group@host)`
static DESCRIBE_USER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^\s.()]+)\.").expect("Invalid describe user regex"));

/// Timestamp following `checked out `
static CHECKED_OUT_AT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"checked out\s(\S+)").expect("Invalid checked out regex"));

/// Timestamp following `created `, cut at the first `,` or `+`
static CREATED_AT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"created\s([^\s,+]+)").expect("Invalid created regex"));

/// Rest of the line following `Modified: ` (view-private files)
static MODIFIED_AT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Modified:\s(.*)").expect("Invalid modified regex"));

/// Parser for cleartool command output
pub struct Parser;

/// First capture group of `regex` in `text`, if non-empty
fn capture<'t>(regex: &Regex, text: &'t str) -> Option<&'t str> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
        .filter(|s| !s.is_empty())
}

/// Extract the branch/version path expression of a history record
///
/// Returns `None` when the line carries no `@@\` or `from \` marker, or the
/// marker is followed by nothing usable.
pub fn extract_version_path(line: &str) -> Option<&str> {
    capture(&VERSION_PATH_REGEX, line)
}

/// Extract the file name of an element-creation header line
pub fn extract_element_name(line: &str) -> Option<&str> {
    capture(&ELEMENT_NAME_REGEX, line)
}

/// Extract the version path (after `@@\`) of a `describe` report
pub fn extract_describe_version(output: &str) -> Option<&str> {
    capture(&DESCRIBE_VERSION_REGEX, output)
}

/// Extract the user name of a `describe` report
pub fn extract_describe_user(output: &str) -> Option<&str> {
    capture(&DESCRIBE_USER_REGEX, output)
}

/// Extract the checkout timestamp of a `describe` report
pub fn extract_checked_out_at(output: &str) -> Option<&str> {
    capture(&CHECKED_OUT_AT_REGEX, output)
}

/// Extract the creation timestamp of a `describe` report
pub fn extract_created_at(output: &str) -> Option<&str> {
    capture(&CREATED_AT_REGEX, output)
}

/// Extract the modification time of a view-private file
pub fn extract_modified_at(output: &str) -> Option<&str> {
    capture(&MODIFIED_AT_REGEX, output)
}
