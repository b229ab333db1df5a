//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    confirmation_accepted, format_delete_result, format_entry, format_listing,
    format_search_result, format_write_result,
};
