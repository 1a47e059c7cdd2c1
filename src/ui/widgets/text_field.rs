// ui/widgets/text_field.rs - Editable single-line input

use super::FIELD_FILL;
use crate::ui::theme::{KeyboardAppearance, Rgba, Theme};
use crate::ui::view::{Surface, Themeable};

#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub text: String,
    pub placeholder: Option<String>,
    pub text_color: Option<Rgba>,
    pub placeholder_color: Option<Rgba>,
    pub keyboard_appearance: Option<KeyboardAppearance>,
    /// Fixed background, independent of the theme
    pub fill: Option<Rgba>,
}

impl TextField {
    pub fn new(placeholder: Option<&str>) -> Self {
        Self {
            placeholder: placeholder.map(str::to_string),
            ..Default::default()
        }
    }

    /// Field embedded in a search bar, drawn on the translucent gray fill
    pub fn search_field(placeholder: Option<&str>) -> Self {
        Self {
            fill: Some(FIELD_FILL),
            ..Self::new(placeholder)
        }
    }
}

impl Themeable for TextField {
    fn kind(&self) -> &'static str {
        "text-field"
    }

    fn apply_theme(&mut self, theme: &Theme, surface: &mut Surface) {
        if let Some(fill) = self.fill {
            surface.background = fill;
        }
        self.text_color = Some(theme.palette.title_text);
        self.keyboard_appearance = Some(theme.appearance.keyboard_appearance);
        if self.placeholder.is_some() {
            self.placeholder_color = Some(theme.palette.muted_accent);
        }
    }

    fn summary(&self) -> String {
        if self.text.is_empty() {
            self.placeholder.clone().unwrap_or_default()
        } else {
            self.text.clone()
        }
    }

    fn foreground(&self) -> Option<Rgba> {
        if self.text.is_empty() {
            self.placeholder_color
        } else {
            self.text_color
        }
    }

    themeable_any!();
}
