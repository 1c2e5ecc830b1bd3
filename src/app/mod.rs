//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `refresh`: background cleartool requests and their results
//! - `actions`: element actions and notifications
//! - `input`: Key event handling
//! - `render`: UI rendering

mod actions;
mod input;
mod refresh;
mod render;
mod state;


pub use state::{App, View};
