// ui/widgets/label.rs - Single-line text

use crate::ui::theme::{Rgba, Theme};
use crate::ui::view::{Surface, Themeable};

#[derive(Debug, Clone, Default)]
pub struct Label {
    pub text: String,
    pub text_color: Option<Rgba>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_color: None,
        }
    }
}

impl Themeable for Label {
    fn kind(&self) -> &'static str {
        "label"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.text_color = Some(theme.palette.title_text);
    }

    fn summary(&self) -> String {
        self.text.clone()
    }

    fn foreground(&self) -> Option<Rgba> {
        self.text_color
    }

    themeable_any!();
}
