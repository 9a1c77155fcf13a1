use super::load_config;
use crate::node::{PromptFilterNode, registry};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::json;
use std::path::Path;

#[derive(Args)]
pub struct NodeArgs {
    #[command(subcommand)]
    pub command: NodeCommands,
}

#[derive(Subcommand)]
pub enum NodeCommands {
    /// Print registration metadata as JSON
    Info,
    /// Print the input schema as JSON
    Schema {
        /// Placeholder language (defaults to node.language from config)
        #[arg(short, long)]
        language: Option<String>,
    },
}

pub fn execute(args: NodeArgs, custom_config: Option<&Path>) -> Result<()> {
    let config = load_config(custom_config)?;
    let node = PromptFilterNode::new(&config.node);

    let value = match args.command {
        NodeCommands::Info => {
            let mappings: serde_json::Map<_, _> = registry(&config.node)
                .into_iter()
                .map(|(id, name)| (id, json!(name)))
                .collect();
            json!({
                "node": node.info(),
                "display_name_mappings": mappings,
            })
        }
        NodeCommands::Schema { language } => {
            let language = language.unwrap_or_else(|| config.node.language.clone());
            node.input_schema(&language)
        }
    };

    let rendered = serde_json::to_string_pretty(&value).context("Failed to serialize node description")?;
    println!("{rendered}");
    Ok(())
}
