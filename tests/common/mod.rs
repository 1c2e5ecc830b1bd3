//! Common test utilities for integration tests.
//!
//! This module provides a scripted stand-in for the `cleartool` binary so
//! the real process plumbing can be exercised without a ClearCase install.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

pub mod fake_cleartool;

pub use fake_cleartool::FakeClearTool;
