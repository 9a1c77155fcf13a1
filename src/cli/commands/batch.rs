use super::{load_config, read_input};
use crate::cli::Output;
use crate::node::PromptFilterNode;
use anyhow::Result;
use clap::Args;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct BatchArgs {
    /// File with one prompt per line (stdin when omitted or "-")
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Comma separated words to remove (defaults to filter.words from config)
    #[arg(short, long)]
    pub words: Option<String>,

    /// Insert ", " between groups or terms that touch without a comma
    #[arg(long)]
    pub separate_groups: bool,
}

pub fn execute(args: BatchArgs, custom_config: Option<&Path>, output: &Output) -> Result<()> {
    let config = load_config(custom_config)?;

    let content = read_input(None, args.input.as_deref())?;
    let words = args.words.unwrap_or_else(|| config.filter.words.clone());

    let mut options = config.filter.options();
    options.separate_adjacent_groups |= args.separate_groups;

    let node = PromptFilterNode::new(&config.node).with_options(options);
    let filter = node.build_filter(&words);

    let lines: Vec<&str> = content.lines().collect();
    output.verbose(&format!(
        "Filtering {} prompts with {} keywords",
        lines.len(),
        filter.keywords().len()
    ));

    // par_iter + collect keeps input order
    let filtered: Vec<String> = lines.par_iter().map(|line| node.run(&filter, line)).collect();

    let changed = lines
        .iter()
        .zip(&filtered)
        .filter(|(before, after)| **before != after.as_str())
        .count();
    tracing::info!("Batch complete: {} of {} prompts changed", changed, lines.len());

    for line in &filtered {
        println!("{line}");
    }

    output.verbose(&format!("{changed} of {} prompts changed", lines.len()));
    Ok(())
}
