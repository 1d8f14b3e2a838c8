//! CLI module - argument parsing, command dispatch and output rendering

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
