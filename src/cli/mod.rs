//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod parsers;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, run_pattern, run_render};
