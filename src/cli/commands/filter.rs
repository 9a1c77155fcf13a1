use super::{load_config, read_input};
use crate::cli::Output;
use crate::node::PromptFilterNode;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct FilterArgs {
    /// Prompt to filter (read from --input or stdin when omitted)
    pub prompt: Option<String>,

    /// Comma separated words to remove (defaults to filter.words from config)
    #[arg(short, long)]
    pub words: Option<String>,

    /// Read the prompt from a file ("-" for stdin)
    #[arg(short, long, value_name = "FILE", conflicts_with = "prompt")]
    pub input: Option<PathBuf>,

    /// Insert ", " between groups or terms that touch without a comma
    #[arg(long)]
    pub separate_groups: bool,

    /// Print a JSON object instead of the bare prompt
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct FilterReport<'a> {
    input: &'a str,
    filter_words: &'a str,
    output: &'a str,
    changed: bool,
}

pub fn execute(args: FilterArgs, custom_config: Option<&Path>, output: &Output) -> Result<()> {
    let config = load_config(custom_config)?;

    let prompt = read_input(args.prompt, args.input.as_deref())?;
    let words = args.words.unwrap_or_else(|| config.filter.words.clone());
    if words.trim().is_empty() {
        output.warning("No filter words given; prompt is passed through unchanged");
    }

    let mut options = config.filter.options();
    options.separate_adjacent_groups |= args.separate_groups;

    let node = PromptFilterNode::new(&config.node).with_options(options);
    let filtered = node.execute(&prompt, &words);
    tracing::info!("Filtered prompt ({} -> {} chars)", prompt.len(), filtered.len());

    if args.json {
        let report = FilterReport {
            input: &prompt,
            filter_words: &words,
            output: &filtered,
            changed: filtered != prompt,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize filter result")?;
        println!("{json}");
    } else {
        println!("{filtered}");
    }

    Ok(())
}
