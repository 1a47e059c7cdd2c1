use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ui::detect_system_theme;

/// Theme name that defers to the system appearance
pub const SYSTEM_THEME: &str = "system";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Invalid config format: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChatshadeConfig {
    /// Theme name, or `system`
    pub theme: Option<String>,
    /// Extra directories searched for `*.toml` themes
    pub theme_dirs: Vec<PathBuf>,
    /// Strings file overlaid on the English defaults
    pub strings: Option<PathBuf>,
    /// Directory attachment images are read from
    pub image_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl ChatshadeConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Explicit path, else the discovered config file, else defaults.
    /// A broken discovered file is logged and ignored; a broken explicit
    /// one is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match crate::theme_discovery::find_config_file() {
            Some(path) => Ok(Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            })),
            None => Ok(Self::default()),
        }
    }

    /// Theme to start with: the CLI choice, then the config, then the
    /// system appearance
    pub fn resolve_theme_name(&self, cli_theme: Option<&str>) -> String {
        let name = cli_theme
            .or(self.theme.as_deref())
            .unwrap_or(SYSTEM_THEME);
        if name == SYSTEM_THEME {
            detect_system_theme().preferred_variant().as_str().to_string()
        } else {
            name.to_string()
        }
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::LevelFilter::Info)
    }
}
