//! Utility modules for common functionality

pub mod exit_codes;
pub mod filesystem;
pub mod filters;
pub mod table;

// Re-export commonly used functions
pub use exit_codes::get_exit_code_description;
pub use filesystem::{ensure_directory_exists, write_new_file};
pub use filters::{
    RepoQuery, UpdateWindow, filter_by_visibility, sort_by_updated, updated_before,
    updated_within,
};
pub use table::{Column, fit, render_table};
