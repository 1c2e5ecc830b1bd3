//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, help_line_count, render_help_panel};
pub use status_bar::{
    FileStatus, STATUS_BAR_HEIGHT, build_file_status_line, build_hints_line, file_info_text,
    render_status_bar, view_status_text,
};
