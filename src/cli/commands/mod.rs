use crate::cli::Output;
use crate::config::PromptFilterConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod batch;
pub mod config;
pub mod filter;
pub mod node;
pub mod version;

#[derive(Parser)]
#[command(
    name = "prompt-filter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Bracket-aware keyword filter for image-generation prompts",
    long_about = "prompt-filter removes comma separated items that exactly match a filter list \
                  while keeping (), [] and {} grouping and :1.2 weights intact."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter a single prompt
    Filter(filter::FilterArgs),
    /// Filter one prompt per line
    Batch(batch::BatchArgs),
    /// Show node registration info and input schema
    Node(node::NodeArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose, self.quiet);
        let config = self.config.as_deref();

        match self.command {
            Some(Commands::Filter(args)) => filter::execute(args, config, &output),
            Some(Commands::Batch(args)) => batch::execute(args, config, &output),
            Some(Commands::Node(args)) => node::execute(args, config),
            Some(Commands::Config(args)) => config::execute(args, config, &output),
            Some(Commands::Version(args)) => version::execute(args),
            None => {
                use clap::CommandFactory;
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info"),
        2 => tracing_subscriber::EnvFilter::new("debug"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    // try_init: a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load configuration, honouring an explicit `--config` file
pub(crate) fn load_config(custom_config: Option<&Path>) -> Result<PromptFilterConfig> {
    PromptFilterConfig::load_with_custom_config(custom_config)
}

/// Read text from an argument, a file, or stdin, in that order
///
/// One trailing line ending is removed from file and stdin input.
pub(crate) fn read_input(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    let mut content = String::new();
    match file {
        Some(path) if path != Path::new("-") => {
            content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        }
        _ => {
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read prompt from stdin")?;
        }
    }

    let trimmed = content
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&content);
    Ok(trimmed.to_string())
}
