// ui/theme_loader.rs - Theme discovery and loading (built-ins plus TOML files)

use super::theme::{BarStyle, KeyboardAppearance, Rgba, Theme, ThemeVariant};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeLoaderError {
    #[error("Theme not found: {0}")]
    NotFound(String),
    #[error("Failed to read theme file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(String),
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),
}

#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub name: String,
    /// `None` for built-in themes
    pub path: Option<PathBuf>,
    pub inherits: Option<String>,
    pub description: Option<String>,
}

impl ThemeInfo {
    fn builtin(variant: ThemeVariant) -> Self {
        Self {
            name: variant.as_str().to_string(),
            path: None,
            inherits: None,
            description: Some("built-in".to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    inherits: Option<String>,
    description: Option<String>,
    palette: PaletteFile,
    appearance: AppearanceFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PaletteFile {
    background_color: Option<String>,
    focused_background: Option<String>,
    body_text: Option<String>,
    title_text: Option<String>,
    auxiliary_text: Option<String>,
    hyperlink_text: Option<String>,
    muted_accent: Option<String>,
    tint_color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct AppearanceFile {
    bar_style: Option<BarStyle>,
    keyboard_appearance: Option<KeyboardAppearance>,
}

pub struct ThemeLoader {
    theme_directories: Vec<PathBuf>,
    theme_cache: HashMap<String, ThemeInfo>,
}

impl ThemeLoader {
    pub fn new() -> Self {
        let mut loader = Self::with_directories(Vec::new());
        loader.add_default_theme_directories();
        loader
    }

    /// Loader that only searches the given directories (plus built-ins)
    pub fn with_directories(directories: Vec<PathBuf>) -> Self {
        let mut loader = Self {
            theme_directories: Vec::new(),
            theme_cache: HashMap::new(),
        };
        for dir in directories {
            loader.add_theme_directory(dir);
        }
        loader.insert_builtins();
        loader
    }

    fn add_default_theme_directories(&mut self) {
        let dirs = vec![
            crate::theme_discovery::user_theme_dir(),
            PathBuf::from("themes"),
        ];

        for dir in dirs {
            self.add_theme_directory(dir);
        }
    }

    pub fn add_theme_directory(&mut self, path: PathBuf) {
        if path.exists() && !self.theme_directories.contains(&path) {
            self.theme_directories.push(path);
        }
    }

    pub fn theme_directories(&self) -> &[PathBuf] {
        &self.theme_directories
    }

    fn insert_builtins(&mut self) {
        for variant in ThemeVariant::ALL {
            self.theme_cache
                .entry(variant.as_str().to_string())
                .or_insert_with(|| ThemeInfo::builtin(variant));
        }
    }

    pub fn discover_themes(&mut self) -> Vec<ThemeInfo> {
        let mut themes = Vec::new();

        for dir in &self.theme_directories {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(ext) = entry.path().extension()
                        && ext == "toml"
                    {
                        match Self::parse_theme_info(&entry.path()) {
                            Ok(info) => themes.push(info),
                            Err(e) => {
                                log::warn!("Skipping theme {}: {}", entry.path().display(), e)
                            }
                        }
                    }
                }
            }
        }

        // Earlier directories win; files shadow built-ins of the same name.
        self.theme_cache.clear();
        for theme in &themes {
            self.theme_cache
                .entry(theme.name.clone())
                .or_insert_with(|| theme.clone());
        }
        self.insert_builtins();

        let mut all: Vec<ThemeInfo> = self.theme_cache.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!("Discovered {} themes", all.len());
        all
    }

    fn parse_theme_info(path: &Path) -> Result<ThemeInfo, ThemeLoaderError> {
        let file = Self::read_theme_file(path)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(ThemeInfo {
            name,
            path: Some(path.to_path_buf()),
            inherits: file.inherits,
            description: file.description,
        })
    }

    fn read_theme_file(path: &Path) -> Result<ThemeFile, ThemeLoaderError> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ThemeLoaderError::ParseError(e.to_string()))
    }

    pub fn load_theme(&self, name: &str) -> Result<Theme, ThemeLoaderError> {
        if let Some(info) = self.theme_cache.get(name) {
            return self.load_theme_from_info(info);
        }

        for dir in &self.theme_directories {
            let path = dir.join(format!("{}.toml", name));
            if path.exists() {
                return Self::load_theme_file(&path);
            }
        }

        name.parse::<ThemeVariant>()
            .map(Theme::from_variant)
            .map_err(|_| ThemeLoaderError::NotFound(name.to_string()))
    }

    fn load_theme_from_info(&self, info: &ThemeInfo) -> Result<Theme, ThemeLoaderError> {
        match &info.path {
            Some(path) => Self::load_theme_file(path),
            None => info
                .name
                .parse::<ThemeVariant>()
                .map(Theme::from_variant)
                .map_err(ThemeLoaderError::InvalidTheme),
        }
    }

    /// Build a theme from a TOML file; the file stem becomes the theme name
    pub fn load_theme_file(path: &Path) -> Result<Theme, ThemeLoaderError> {
        let file = Self::read_theme_file(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        build_theme(name, file)
    }

    pub fn list_themes(&mut self) -> Vec<String> {
        self.discover_themes()
            .into_iter()
            .map(|info| info.name)
            .collect()
    }

    pub fn get_available_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.theme_cache.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn get_theme_info(&self, name: &str) -> Option<&ThemeInfo> {
        self.theme_cache.get(name)
    }

    pub fn theme_exists(&self, name: &str) -> bool {
        self.theme_cache.contains_key(name)
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn build_theme(name: &str, file: ThemeFile) -> Result<Theme, ThemeLoaderError> {
    let parent = file.inherits.as_deref().unwrap_or("dark");
    let variant = parent
        .parse::<ThemeVariant>()
        .map_err(ThemeLoaderError::InvalidTheme)?;

    let mut theme = Theme::from_variant(variant);
    theme.name = name.to_string();

    let p = &file.palette;
    let palette = &mut theme.palette;
    for (value, slot) in [
        (&p.background_color, &mut palette.background_color),
        (&p.focused_background, &mut palette.focused_background),
        (&p.body_text, &mut palette.body_text),
        (&p.title_text, &mut palette.title_text),
        (&p.auxiliary_text, &mut palette.auxiliary_text),
        (&p.hyperlink_text, &mut palette.hyperlink_text),
        (&p.muted_accent, &mut palette.muted_accent),
        (&p.tint_color, &mut palette.tint_color),
    ] {
        if let Some(hex) = value {
            *slot = Rgba::from_hex(hex)
                .ok_or_else(|| ThemeLoaderError::InvalidTheme(format!("bad color '{}'", hex)))?;
        }
    }

    if let Some(bar_style) = file.appearance.bar_style {
        theme.appearance.bar_style = bar_style;
    }
    if let Some(keyboard) = file.appearance.keyboard_appearance {
        theme.appearance.keyboard_appearance = keyboard;
    }

    Ok(theme)
}
