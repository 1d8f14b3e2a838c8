//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{demo::DemoArgs, rates::RatesCommands};

#[derive(Parser)]
#[command(name = "tubesc")]
#[command(author, version, about = "Tube shop cost estimator")]
#[command(long_about = "Estimates the manufacturing cost of welded pipe/tube assemblies from pipe geometry, hole cutting and shop rate tables.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Config file with shop rates and pricing
    #[arg(long, short = 'c', global = true, env = "TUBESC_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and price the sample order
    Demo(DemoArgs),

    /// Inspect the effective rate configuration
    #[command(subcommand)]
    Rates(RatesCommands),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table for quotes, YAML for configuration
    #[default]
    Auto,
    /// Plain text tables
    Table,
    /// JSON format (for programming)
    Json,
    /// YAML format (full fidelity)
    Yaml,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
