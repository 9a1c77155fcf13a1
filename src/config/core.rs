use super::PromptFilterConfig;
use super::smart_load::ConfigFormat;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::Path;

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "PROMPT_FILTER_";

/// Base name of project-local configuration files
const PROJECT_CONFIG: &str = "prompt-filter";

impl PromptFilterConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(custom_config, ENV_PREFIX)
    }

    /// Load with a specific environment prefix
    pub fn load_with_env_prefix(custom_config: Option<&Path>, env_prefix: &str) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");
        let figment = Self::figment(custom_config, env_prefix)?;

        let config: PromptFilterConfig = figment
            .extract()
            .context("Failed to extract prompt-filter configuration")?;

        let keywords = crate::filter::KeywordSet::parse(&config.filter.words);
        let mut default_words: Vec<&str> = keywords.iter().collect();
        default_words.sort_unstable();
        tracing::debug!(
            "Loaded configuration: default filter words {:?}, separate_adjacent_groups = {}",
            default_words,
            config.filter.separate_adjacent_groups
        );
        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(custom_config: Option<&Path>, env_prefix: &str) -> Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        if let Some(custom_path) = custom_config {
            // Explicit config replaces the user/project lookup
            if !custom_path.exists() {
                anyhow::bail!("Configuration file not found: {}", custom_path.display());
            }
            let format = ConfigFormat::detect(custom_path)
                .with_context(|| format!("Failed to read config file: {}", custom_path.display()))?;
            tracing::debug!("CONFIG LOAD: {} as {:?}", custom_path.display(), format);
            figment = format.merge_file(figment, custom_path);
        } else {
            let user_config = Self::user_config_path();
            tracing::trace!("CONFIG LOAD: User config base {}", user_config);
            figment = figment
                // User config - support multiple formats
                .merge(Toml::file(format!("{user_config}.toml")))
                .merge(Json::file(format!("{user_config}.json")))
                .merge(Yaml::file(format!("{user_config}.yaml")))
                .merge(Yaml::file(format!("{user_config}.yml")))
                // Project config - support multiple formats
                .merge(Toml::file(format!("{PROJECT_CONFIG}.toml")))
                .merge(Json::file(format!("{PROJECT_CONFIG}.json")))
                .merge(Yaml::file(format!("{PROJECT_CONFIG}.yaml")))
                .merge(Yaml::file(format!("{PROJECT_CONFIG}.yml")));
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed(env_prefix).split("__")))
    }

    /// Full merged configuration as JSON, for display
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("Failed to serialize configuration")
    }

    /// User config path without extension
    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/prompt-filter/config"),
            Err(_) => "~/.config/prompt-filter/config".to_string(),
        }
    }
}
