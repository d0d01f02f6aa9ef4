use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{ExportFormat, ImageFilter};
use crate::constants;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Export format used when neither `--format` nor the environment sets one
    pub default_format: Option<ExportFormat>,

    /// List images whose effective stability is experimental
    #[serde(default = "default_include_experimental")]
    pub include_experimental: bool,

    /// Categories left out of `list` and `export`
    #[serde(default)]
    pub hidden_categories: Vec<String>,
}

fn default_include_experimental() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: None,
            include_experimental: default_include_experimental(),
            hidden_categories: Vec::new(),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::config::APP_DIR)
                .join(constants::config::FILE_NAME)
        })
    }

    /// Load from `path`, or the default location when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Base filter carrying the config-level restrictions
    pub fn image_filter(&self) -> ImageFilter {
        ImageFilter {
            exclude_experimental: !self.include_experimental,
            hidden_categories: self.hidden_categories.clone(),
            ..Default::default()
        }
    }
}
