//! Logging capability
//!
//! The terminal belongs to the TUI, so log output goes to a file through
//! `tracing-subscriber`. Components never reach for a global logger: they
//! receive an `Arc<dyn Logger>` built once in `main`.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "CLEARTUI_LOG";

/// Injected logging capability
pub trait Logger: Send + Sync + fmt::Debug {
    fn log(&self, message: &str);
}

/// [`Logger`] forwarding to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "cleartui", "{}", message);
    }
}

/// [`Logger`] keeping messages in memory
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    /// Snapshot of everything logged so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Errors while setting up the log file
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot install log subscriber: {0}")]
    Init(String),
}

/// Default log file location (`<cache dir>/cleartui/cleartui.log`)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("cleartui").join("cleartui.log"))
}

/// Log file chosen at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Given with `--log-file` or `log.file`
    Explicit(PathBuf),
    /// Derived from the cache directory
    Default(PathBuf),
}

impl LogTarget {
    /// Command line first, then config, then [`default_log_path`]
    pub fn resolve(cli: Option<PathBuf>, config: Option<PathBuf>) -> Option<Self> {
        cli.or(config)
            .map(Self::Explicit)
            .or_else(|| default_log_path().map(Self::Default))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }
}

/// Install logging for `target`
///
/// Failing to open an explicit log file is an error. A derived default
/// that cannot be opened only disables logging, with a note on stderr.
pub fn init_logging(target: &LogTarget, level: &str) -> Result<(), LoggingError> {
    match (target, init_tracing(target.path(), level)) {
        (_, Ok(())) => Ok(()),
        (LogTarget::Default(_), Err(e)) => {
            eprintln!("cleartui: logging disabled: {e}");
            Ok(())
        }
        (LogTarget::Explicit(_), Err(e)) => Err(e),
    }
}

/// Install the global `tracing` subscriber writing to `path`
///
/// The filter comes from `CLEARTUI_LOG` when set, else from `level`.
pub fn init_tracing(path: &Path, level: &str) -> Result<(), LoggingError> {
    let open_error = |source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(open_error)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
