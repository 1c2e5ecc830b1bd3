//! cleartool command execution layer
//!
//! This module handles executing cleartool commands and parsing their output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::{ClearToolExecutor, CommandRunner, CommentArg, ProcessRunner, resolve_element_path};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when executing cleartool commands
#[derive(Error, Debug)]
pub enum ClearToolError {
    #[error("cleartool command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    /// cleartool exited successfully but still reported something on stderr
    #[error("{0}")]
    StderrOutput(String),

    #[error("Cannot resolve element path {path}: {source}")]
    ElementPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("cleartool is not installed or not in PATH")]
    ClearToolNotFound,
}
