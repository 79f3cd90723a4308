use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub connectors: ConnectorsConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    /// Result cap applied when `nl search` is run without `--limit`.
    #[serde(default)]
    pub default_limit: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LinksConfig {
    #[serde(default = "default_links_enabled")]
    pub enabled: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_links_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConnectorsConfig {
    pub filesystem: Option<FilesystemConnectorConfig>,
    pub json: Option<JsonConnectorConfig>,
}

impl ConnectorsConfig {
    pub fn is_empty(&self) -> bool {
        self.filesystem.is_none() && self.json.is_none()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilesystemConnectorConfig {
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.md".to_string(), "**/*.txt".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct JsonConnectorConfig {
    /// JSON file holding an array of notes.
    pub path: PathBuf,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.search.default_limit == Some(0) {
        anyhow::bail!("search.default_limit must be >= 1");
    }

    if config.connectors.is_empty() {
        anyhow::bail!(
            "No note connectors configured. Add [connectors.filesystem] or [connectors.json]."
        );
    }

    if let Some(fs) = &config.connectors.filesystem {
        if fs.include_globs.is_empty() {
            anyhow::bail!("connectors.filesystem.include_globs must not be empty");
        }
    }

    Ok(config)
}
