//! cleartui - Text-mode Interface for ClearCase
//!
//! A TUI application around the `cleartool` command line.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`cleartool`]: cleartool command execution and parsing
//! - [`config`]: User configuration file
//! - [`keys`]: Key binding definitions
//! - [`logging`]: Output log and tracing setup
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod cleartool;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
