//! History output parser (cleartool lshistory)

use super::super::constants::markers;
use super::{Parser, extract_element_name, extract_version_path};
use crate::model::HistoryEvent;

impl Parser {
    /// Parse `cleartool lshistory` output into a list of events
    ///
    /// Line classification:
    /// - Lines starting with two spaces: comment of the previous record
    /// - Any other line: a record, or skipped when no pattern matches
    ///
    /// Never fails. Comment lines before the first record are dropped, and a
    /// record keeps only the last of several comment lines.
    pub fn parse_history(output: &str) -> Vec<HistoryEvent> {
        let mut events: Vec<HistoryEvent> = Vec::new();

        for line in output.lines() {
            if let Some(comment) = line.strip_prefix(markers::COMMENT_INDENT) {
                let comment = comment.trim();
                if comment.is_empty() {
                    continue;
                }
                if let Some(last) = events.last_mut() {
                    last.comment = Some(comment.to_string());
                }
                continue;
            }

            if let Some(event) = Self::parse_history_record(line) {
                events.push(event);
            }
        }

        events
    }

    /// Parse a single (non-comment) history line
    ///
    /// Formats:
    /// - `<time> <user> <operation> <kind> ... @@\<path> ...`
    /// - `<time> <user> <operation> <kind> ... from \<path> ...`
    /// - `<time> <user> <verb> <noun> <kind> ".\<file>@@"` (element created)
    pub(super) fn parse_history_record(line: &str) -> Option<HistoryEvent> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if let Some(path) = extract_version_path(line) {
            let [timestamp, user, operation, kind, ..] = tokens.as_slice() else {
                return None;
            };
            let path = split_version_path(path);
            if path.is_empty() {
                return None;
            }
            return Some(HistoryEvent {
                timestamp: timestamp.to_string(),
                user: user.to_string(),
                operation: operation.to_string(),
                kind: kind.to_string(),
                path,
                comment: None,
                element: false,
            });
        }

        let name = extract_element_name(line)?;
        let [timestamp, user, verb, noun, kind, ..] = tokens.as_slice() else {
            return None;
        };
        Some(HistoryEvent {
            timestamp: timestamp.to_string(),
            user: user.to_string(),
            operation: format!("{} {}", verb, noun),
            kind: kind.to_string(),
            path: vec![name.to_string()],
            comment: None,
            element: true,
        })
    }
}

/// Split `main\bugfix\3` into `["main", "bugfix", "3"]`
fn split_version_path(path: &str) -> Vec<String> {
    path.split(markers::PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}
