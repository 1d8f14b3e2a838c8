//! `tubesc rates` command - inspect rate configuration

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum RatesCommands {
    /// Show the effective shop rates and pricing after all config layers
    Show,

    /// Show the path of the global config file
    Path,
}

pub fn run(cmd: RatesCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        RatesCommands::Show => run_show(global),
        RatesCommands::Path => run_path(global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let config = Config::load(global.config.as_deref())?;
    let rendered = match global.format {
        OutputFormat::Json => serde_json::to_string_pretty(&config).into_diagnostic()?,
        OutputFormat::Auto | OutputFormat::Yaml => serde_yml::to_string(&config).into_diagnostic()?,
        other => {
            return Err(miette::miette!(
                "rates can be shown as yaml or json, not {:?}",
                other
            ))
        }
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    match Config::global_config_path() {
        Some(path) => {
            if global.quiet {
                println!("{}", path.display());
            } else {
                let state = if path.exists() { "exists" } else { "not created" };
                println!("{} ({})", path.display(), style(state).dim());
            }
            Ok(())
        }
        None => Err(miette::miette!("Could not determine the user config directory")),
    }
}
