//! # prompt-filter
//!
//! Removes unwanted keywords from comma separated image-generation prompts
//! while keeping bracket groups and `:1.2` weights intact.
//!
//! ```
//! use prompt_filter::filter_prompt;
//!
//! let filtered = filter_prompt("beautiful girl, (red:1.2), [blue eyes]", "red");
//! assert_eq!(filtered, "beautiful girl, [blue eyes]");
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! prompt-filter filter "1girl, nsfw, (solo:1.1)" -w nsfw
//! prompt-filter batch -i prompts.txt -w "nsfw, lowres"
//! prompt-filter node schema --language zh
//! ```

pub mod cli;
pub mod config;
pub mod filter;
pub mod node;

pub use cli::{Cli, Output};
pub use config::PromptFilterConfig;
pub use filter::{FilterOptions, KeywordSet, PromptFilter, filter_prompt};
pub use node::PromptFilterNode;

/// Result type alias for prompt-filter operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
