// localization.rs - String lookup for user-facing text

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Looks up user-facing strings by key
pub trait Localizer {
    /// Localized text for `key`; unknown keys come back unchanged
    fn localized(&self, key: &str) -> String;
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Failed to read strings file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse strings TOML: {0}")]
    ParseError(String),
}

const ENGLISH: &[(&str, &str)] = &[
    ("servers.title", "Select Server"),
    ("alert.insecure_image.title", "Insecure image"),
    (
        "alert.insecure_image.message",
        "This image is served over an insecure connection and cannot be opened.",
    ),
];

/// In-memory string table
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    pub fn english() -> Self {
        Self {
            strings: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// English defaults overlaid with the strings in `path`
    pub fn from_file(path: &Path) -> Result<Self, LocalizationError> {
        let content = std::fs::read_to_string(path)?;
        let mut table = Self::english();
        table.merge_toml(&content)?;
        Ok(table)
    }

    /// Merge `key = "value"` pairs; nested tables join their keys with dots
    pub fn merge_toml(&mut self, content: &str) -> Result<(), LocalizationError> {
        let value: toml::Table =
            toml::from_str(content).map_err(|e| LocalizationError::ParseError(e.to_string()))?;
        self.merge_table("", &value)
    }

    fn merge_table(&mut self, prefix: &str, table: &toml::Table) -> Result<(), LocalizationError> {
        for (key, value) in table {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match value {
                toml::Value::String(text) => {
                    self.strings.insert(full_key, text.clone());
                }
                toml::Value::Table(nested) => self.merge_table(&full_key, nested)?,
                other => {
                    return Err(LocalizationError::ParseError(format!(
                        "'{}' must be a string, found {}",
                        full_key,
                        other.type_str()
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Localizer for StringTable {
    fn localized(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(text) => text.clone(),
            None => {
                log::debug!("Missing localization for '{}'", key);
                key.to_string()
            }
        }
    }
}
