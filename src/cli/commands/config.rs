//! Configuration command implementations

use super::load_config;
use crate::cli::Output;
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use std::path::Path;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,
    },
    /// Validate the merged configuration
    Validate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShowFormat {
    Toml,
    Json,
    Yaml,
}

/// Execute config commands
pub fn execute(args: ConfigArgs, custom_config: Option<&Path>, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommands::Show { format } => show(custom_config, format),
        ConfigCommands::Validate => validate(custom_config, output),
    }
}

fn show(custom_config: Option<&Path>, format: ShowFormat) -> Result<()> {
    let config = load_config(custom_config)?;

    let rendered = match format {
        ShowFormat::Toml => toml::to_string_pretty(&config).context("Failed to render configuration as TOML")?,
        ShowFormat::Json => serde_json::to_string_pretty(&config.to_value()?)
            .context("Failed to render configuration as JSON")?,
        ShowFormat::Yaml => serde_yml::to_string(&config).context("Failed to render configuration as YAML")?,
    };

    println!("{}", rendered.trim_end());
    Ok(())
}

fn validate(custom_config: Option<&Path>, output: &Output) -> Result<()> {
    let config = match load_config(custom_config) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("Configuration failed to load: {e:#}"));
            return Err(e);
        }
    };

    if let Err(e) = config.validate() {
        output.error(&format!("Configuration is invalid: {e}"));
        return Err(e);
    }

    output.success("Configuration is valid");
    output.table_row("Node", &format!("{} ({})", config.node.id, config.node.name));
    output.table_row("Category", &config.node.category);
    output.table_row("Language", &config.node.language);
    let words = if config.filter.words.trim().is_empty() {
        "(none)".to_string()
    } else {
        config.filter.words.clone()
    };
    output.table_row("Default filter words", &words);
    Ok(())
}
