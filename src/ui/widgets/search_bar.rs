// ui/widgets/search_bar.rs - Search bar; its field is a child `TextField::search_field`

use crate::ui::theme::{BarStyle, KeyboardAppearance, Rgba, Theme};
use crate::ui::view::{Surface, Themeable};

#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    pub query: String,
    pub bar_style: Option<BarStyle>,
    pub tint: Option<Rgba>,
    pub keyboard_appearance: Option<KeyboardAppearance>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Themeable for SearchBar {
    fn kind(&self) -> &'static str {
        "search-bar"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.bar_style = Some(theme.appearance.bar_style);
        self.tint = Some(theme.palette.hyperlink_text);
        self.keyboard_appearance = Some(theme.appearance.keyboard_appearance);
    }

    fn summary(&self) -> String {
        format!("search: {}", self.query)
    }

    fn foreground(&self) -> Option<Rgba> {
        self.tint
    }

    themeable_any!();
}
