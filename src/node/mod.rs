//! Host node integration
//!
//! Describes the filter the way a node-graph host registers it (class id,
//! display name, category, two multiline string inputs and one output) and
//! runs it behind a wrapper that never lets a failure reach the user: if
//! filtering blows up, the original prompt is returned.

use crate::config::NodeSettings;
use crate::filter::{FilterOptions, PromptFilter};
use serde::Serialize;
use serde_json::{Value, json};
use std::panic::{self, AssertUnwindSafe};

/// Name of the prompt input
pub const INPUT_PROMPT: &str = "input_prompt";

/// Name of the filter-word input
pub const FILTER_WORDS: &str = "filter_words";

/// Name of the single output
pub const FILTERED_PROMPT: &str = "filtered_prompt";

/// Registration metadata for the node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub id: String,
    pub display_name: String,
    pub category: String,
    pub version: String,
    pub function: &'static str,
    pub return_types: Vec<&'static str>,
    pub return_names: Vec<&'static str>,
}

/// Prompt filter node as seen by a host
#[derive(Debug, Clone)]
pub struct PromptFilterNode {
    settings: NodeSettings,
    options: FilterOptions,
}

impl PromptFilterNode {
    pub fn new(settings: &NodeSettings) -> Self {
        Self {
            settings: settings.clone(),
            options: FilterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn info(&self) -> NodeInfo {
        NodeInfo {
            id: self.settings.id.clone(),
            display_name: self.settings.name.clone(),
            category: self.settings.category.clone(),
            version: self.settings.version.clone(),
            function: "filter_prompt",
            return_types: vec!["STRING"],
            return_names: vec![FILTERED_PROMPT],
        }
    }

    /// Input widget schema with placeholders in `language`
    pub fn input_schema(&self, language: &str) -> Value {
        let input = |field: &str| {
            json!(["STRING", {
                "multiline": true,
                "default": "",
                "placeholder": self.settings.placeholder(field, language),
            }])
        };

        json!({
            "required": {
                INPUT_PROMPT: input("input"),
                FILTER_WORDS: input("filter"),
            }
        })
    }

    /// Compile a filter for `filter_words` with this node's options
    pub fn build_filter(&self, filter_words: &str) -> PromptFilter {
        PromptFilter::new(filter_words).options(self.options)
    }

    /// Filter `input_prompt`, falling back to it unchanged on any failure
    pub fn execute(&self, input_prompt: &str, filter_words: &str) -> String {
        self.guarded(input_prompt, || self.build_filter(filter_words).apply(input_prompt))
    }

    /// Like [`execute`](Self::execute) with an already compiled filter
    pub fn run(&self, filter: &PromptFilter, input_prompt: &str) -> String {
        self.guarded(input_prompt, || filter.apply(input_prompt))
    }

    /// Run `filter` and contain any panic it raises
    fn guarded<F>(&self, input_prompt: &str, filter: F) -> String
    where
        F: FnOnce() -> String,
    {
        match panic::catch_unwind(AssertUnwindSafe(filter)) {
            Ok(filtered) => filtered,
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!("Error in {}: {}", self.settings.id, reason);
                input_prompt.to_string()
            }
        }
    }
}

/// Class id to display name mappings for every node this crate provides
pub fn registry(settings: &NodeSettings) -> Vec<(String, String)> {
    vec![(settings.id.clone(), settings.name.clone())]
}
