//! Configuration management for prompt-filter
//!
//! Settings are layered with figment: embedded defaults, then user and
//! project files in TOML, JSON or YAML, then an explicit `--config` file,
//! then `PROMPT_FILTER_` environment variables.

mod core;
mod smart_load;

pub use self::core::{DEFAULT_CONFIG, ENV_PREFIX};
pub use smart_load::ConfigFormat;

use crate::filter::FilterOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PromptFilterConfig {
    /// Filtering behaviour
    pub filter: FilterSettings,

    /// Host node metadata
    pub node: NodeSettings,
}

/// Filter-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSettings {
    /// Comma separated filter words used when none are given explicitly
    pub words: String,

    /// Insert `, ` between groups or terms that touch without a comma
    pub separate_adjacent_groups: bool,
}

impl FilterSettings {
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            separate_adjacent_groups: self.separate_adjacent_groups,
        }
    }
}

/// Node registration and input widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSettings {
    /// Class id the host registers the node under
    pub id: String,

    /// Display name
    pub name: String,

    /// Menu category
    pub category: String,

    pub version: String,

    /// Language used for input placeholders
    pub language: String,

    /// Localized placeholder text per input field
    pub placeholders: Placeholders,
}

/// Placeholder text keyed by language code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub input: BTreeMap<String, String>,
    pub filter: BTreeMap<String, String>,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            id: "PromptFilterNode".to_string(),
            name: "Prompt Filter".to_string(),
            category: "text/prompt".to_string(),
            version: "1.0.0".to_string(),
            language: "en".to_string(),
            placeholders: Placeholders::default(),
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            input: BTreeMap::from([
                ("en".to_string(), "Enter prompt to process...".to_string()),
                ("zh".to_string(), "輸入要處理的prompt...".to_string()),
            ]),
            filter: BTreeMap::from([
                (
                    "en".to_string(),
                    "Enter words to filter, separated by commas...".to_string(),
                ),
                ("zh".to_string(), "輸入要過濾的詞彙，用逗號分隔...".to_string()),
            ]),
        }
    }
}

impl NodeSettings {
    /// Placeholder for `field` (`input` or `filter`) in `language`
    ///
    /// Unknown fields and languages yield an empty string.
    pub fn placeholder(&self, field: &str, language: &str) -> &str {
        let table = match field {
            "input" => &self.placeholders.input,
            "filter" => &self.placeholders.filter,
            _ => return "",
        };
        table.get(language).map(String::as_str).unwrap_or("")
    }
}

impl PromptFilterConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.node.id.trim().is_empty() {
            anyhow::bail!("Node id cannot be empty");
        }
        if self.node.name.trim().is_empty() {
            anyhow::bail!("Node display name cannot be empty");
        }
        if self.node.category.trim().is_empty() {
            anyhow::bail!("Node category cannot be empty");
        }

        let language = &self.node.language;
        if !self.node.placeholders.input.contains_key(language)
            || !self.node.placeholders.filter.contains_key(language)
        {
            anyhow::bail!(
                "Node language '{}' has no placeholder text for every input",
                language
            );
        }

        Ok(())
    }
}
