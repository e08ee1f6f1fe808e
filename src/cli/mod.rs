//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod error;

pub use args::{Args, Command, ConfigAction, RenderArgs};
pub use commands::{
    ctrlc_received, handle_config_action, list_charsets, run, run_gif, run_image, run_stream,
    setup_ctrlc_handler, RenderSettings, StreamOptions,
};
pub use enums::{CharacterSet, Format, RowColorMode};
pub use error::CliError;
