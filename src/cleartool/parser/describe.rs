//! Describe output parser (cleartool describe)

use super::super::constants::markers;
use super::{
    Parser, extract_checked_out_at, extract_created_at, extract_describe_user,
    extract_describe_version, extract_modified_at,
};
use crate::model::{Describe, FileState};

impl Parser {
    /// Classify `cleartool describe` output
    ///
    /// - version marker + `CHECKEDOUT` → [`FileState::CheckedOut`]
    /// - version marker only → [`FileState::Locked`]
    /// - no version marker → [`FileState::Private`]
    ///
    /// [`FileState::Unknown`] is never produced here; it is the caller's
    /// state when the command itself failed.
    pub fn parse_describe(output: &str) -> Describe {
        let Some(version) = extract_describe_version(output) else {
            return Describe {
                state: FileState::Private,
                version: None,
                user: None,
                since: extract_modified_at(output).map(str::to_string),
            };
        };

        let (state, since) = if output.contains(markers::CHECKEDOUT) {
            (FileState::CheckedOut, extract_checked_out_at(output))
        } else {
            (FileState::Locked, extract_created_at(output))
        };

        Describe {
            state,
            version: Some(version.to_string()),
            user: extract_describe_user(output).map(str::to_string),
            since: since.map(str::to_string),
        }
    }
}
