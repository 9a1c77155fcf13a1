//! Command-line interface for prompt-filter
//!
//! The binary acts as the host for the filter node: it resolves the prompt
//! and filter words, runs the node's fail-safe filter and prints the result.

pub mod commands;
mod output;

pub use commands::Cli;
pub use output::Output;
