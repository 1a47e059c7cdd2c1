// ui/widgets/container.rs - Plain grouping view

use crate::ui::theme::Theme;
use crate::ui::view::{Surface, Themeable};

/// Groups children; only the surface rule applies to it
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub name: String,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Themeable for Container {
    fn kind(&self) -> &'static str {
        "container"
    }

    fn apply_theme(&mut self, _theme: &Theme, _surface: &mut Surface) {}

    fn summary(&self) -> String {
        self.name.clone()
    }

    themeable_any!();
}
