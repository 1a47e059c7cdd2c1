// ui/widgets/bars.rs - Bars that always follow the registry's theme

use crate::ui::theme::{BarStyle, KeyboardAppearance, Rgba, Theme};
use crate::ui::view::{Surface, ThemeAnchor, Themeable};

#[derive(Debug, Clone, Default)]
pub struct NavigationBar {
    pub title: String,
    pub tint: Option<Rgba>,
    pub bar_style: Option<BarStyle>,
}

impl NavigationBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl Themeable for NavigationBar {
    fn kind(&self) -> &'static str {
        "navigation-bar"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.tint = Some(theme.palette.body_text);
        self.bar_style = Some(theme.appearance.bar_style);
    }

    fn anchor(&self) -> ThemeAnchor {
        ThemeAnchor::Global
    }

    fn summary(&self) -> String {
        self.title.clone()
    }

    fn foreground(&self) -> Option<Rgba> {
        self.tint
    }

    themeable_any!();
}

#[derive(Debug, Clone)]
pub struct Toolbar {
    pub translucent: bool,
    pub bar_tint: Option<Rgba>,
    pub tint: Option<Rgba>,
    pub bar_style: Option<BarStyle>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self {
            translucent: true,
            bar_tint: None,
            tint: None,
            bar_style: None,
        }
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for Toolbar {
    fn kind(&self) -> &'static str {
        "toolbar"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.translucent = false;
        self.bar_tint = Some(theme.palette.focused_background);
        self.tint = Some(theme.palette.tint_color);
        self.bar_style = Some(theme.appearance.bar_style);
    }

    fn anchor(&self) -> ThemeAnchor {
        ThemeAnchor::Global
    }

    fn foreground(&self) -> Option<Rgba> {
        self.tint
    }

    themeable_any!();
}

#[derive(Debug, Clone, Default)]
pub struct TabBar {
    pub items: Vec<String>,
    pub bar_tint: Option<Rgba>,
    pub tint: Option<Rgba>,
    pub bar_style: Option<BarStyle>,
}

impl TabBar {
    pub fn new(items: &[&str]) -> Self {
        Self {
            items: items.iter().map(|item| item.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl Themeable for TabBar {
    fn kind(&self) -> &'static str {
        "tab-bar"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.bar_tint = Some(theme.palette.focused_background);
        self.tint = Some(theme.palette.tint_color);
        self.bar_style = Some(theme.appearance.bar_style);
    }

    fn anchor(&self) -> ThemeAnchor {
        ThemeAnchor::Global
    }

    fn summary(&self) -> String {
        self.items.join(" | ")
    }

    fn foreground(&self) -> Option<Rgba> {
        self.tint
    }

    themeable_any!();
}

/// Container of the message composer; sets the keyboard its text view shows
#[derive(Debug, Clone, Default)]
pub struct TextInputBar {
    pub keyboard_appearance: Option<KeyboardAppearance>,
}

impl Themeable for TextInputBar {
    fn kind(&self) -> &'static str {
        "input-bar"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.keyboard_appearance = Some(theme.appearance.keyboard_appearance);
    }

    fn anchor(&self) -> ThemeAnchor {
        ThemeAnchor::Global
    }

    themeable_any!();
}
