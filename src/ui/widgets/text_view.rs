// ui/widgets/text_view.rs - Multi-line text views

use super::{FIELD_BORDER, FIELD_FILL};
use crate::ui::theme::{Rgba, Theme};
use crate::ui::view::{Surface, Themeable};

#[derive(Debug, Clone, Default)]
pub struct TextView {
    pub text: String,
    pub text_color: Option<Rgba>,
    pub tint: Option<Rgba>,
}

impl TextView {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Themeable for TextView {
    fn kind(&self) -> &'static str {
        "text-view"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.text_color = Some(theme.palette.body_text);
        self.tint = Some(theme.palette.hyperlink_text);
    }

    fn summary(&self) -> String {
        self.text.lines().next().unwrap_or_default().to_string()
    }

    fn foreground(&self) -> Option<Rgba> {
        self.text_color
    }

    themeable_any!();
}

/// Message composer input: fixed translucent chrome, themed text
#[derive(Debug, Clone, Default)]
pub struct ComposerTextView {
    pub text: String,
    pub text_color: Option<Rgba>,
    pub tint: Option<Rgba>,
    pub border_color: Option<Rgba>,
}

impl Themeable for ComposerTextView {
    fn kind(&self) -> &'static str {
        "composer"
    }

    fn apply_theme(&mut self, theme: &Theme, surface: &mut Surface) {
        self.text_color = Some(theme.palette.body_text);
        self.tint = Some(theme.palette.hyperlink_text);
        self.border_color = Some(FIELD_BORDER);
        surface.background = FIELD_FILL;
    }

    fn summary(&self) -> String {
        self.text.clone()
    }

    fn foreground(&self) -> Option<Rgba> {
        self.text_color
    }

    themeable_any!();
}
