use anyhow::Result;
use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use std::path::Path;

/// Format of an explicitly supplied configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Format implied by a file extension, if any
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    /// Pick the format from the extension, falling back to the file content
    ///
    /// Unknown content defaults to TOML.
    pub fn detect(path: &Path) -> Result<Self> {
        if let Some(format) = Self::from_extension(path) {
            return Ok(format);
        }

        let content = std::fs::read_to_string(path)?;
        match Self::sniff(&content) {
            Some(format) => {
                tracing::debug!("Detected {:?} content for {}", format, path.display());
                Ok(format)
            }
            None => {
                tracing::debug!("Could not detect format of {}, defaulting to TOML", path.display());
                Ok(ConfigFormat::Toml)
            }
        }
    }

    /// Guess the format of configuration text
    pub fn sniff(content: &str) -> Option<Self> {
        let trimmed = content.trim();

        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            return Some(ConfigFormat::Json);
        }

        let mut lines = trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        // TOML tables and `key = value` pairs take precedence over YAML
        if lines.clone().any(|line| {
            (line.starts_with('[') && line.ends_with(']')) || (line.contains('=') && !line.contains(':'))
        }) {
            return Some(ConfigFormat::Toml);
        }

        if trimmed.starts_with("---") || lines.any(|line| line.contains(':')) {
            return Some(ConfigFormat::Yaml);
        }

        None
    }

    /// Merge `path` into `figment` using this format's provider
    pub fn merge_file(self, figment: Figment, path: &Path) -> Figment {
        match self {
            ConfigFormat::Toml => figment.merge(Toml::file(path)),
            ConfigFormat::Json => figment.merge(Json::file(path)),
            ConfigFormat::Yaml => figment.merge(Yaml::file(path)),
        }
    }
}
