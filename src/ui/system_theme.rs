// ui/system_theme.rs - System appearance detection

use super::theme::ThemeVariant;

/// Detected system theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTheme {
    Light,
    Dark,
    Unknown,
}

impl SystemTheme {
    /// Built-in variant matching this appearance; unknown falls back to dark
    pub fn preferred_variant(self) -> ThemeVariant {
        match self {
            SystemTheme::Light => ThemeVariant::Light,
            SystemTheme::Dark | SystemTheme::Unknown => ThemeVariant::Dark,
        }
    }
}

/// Get system theme preference
pub fn detect_system_theme() -> SystemTheme {
    detect_from(|key| std::env::var(key).ok())
}

fn detect_from(var: impl Fn(&str) -> Option<String>) -> SystemTheme {
    // COLORFGBG is "fg;bg"; a bright background index means a light scheme
    if let Some(colors) = var("COLORFGBG") {
        if colors.contains("dark") {
            return SystemTheme::Dark;
        }
        if colors.contains("light") {
            return SystemTheme::Light;
        }
        return match colors.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()) {
            Some(7) | Some(9..=15) => SystemTheme::Light,
            Some(_) => SystemTheme::Dark,
            None => SystemTheme::Unknown,
        };
    }

    if var("DARK_MODE").is_some() {
        return SystemTheme::Dark;
    }

    if let Some(term) = var("TERM")
        && (term.contains("dark") || term.contains("night"))
    {
        return SystemTheme::Dark;
    }

    SystemTheme::Unknown
}
