// ui/widgets/indicators.rs - Progress indicators

use crate::ui::theme::{Rgba, Theme};
use crate::ui::view::{Surface, Themeable};

/// Spinner shown while something loads
#[derive(Debug, Clone, Default)]
pub struct ActivityIndicator {
    pub color: Option<Rgba>,
    animating: bool,
}

impl ActivityIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_animating(&mut self) {
        self.animating = true;
    }

    pub fn stop_animating(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

impl Themeable for ActivityIndicator {
    fn kind(&self) -> &'static str {
        "activity-indicator"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.color = Some(theme.palette.body_text);
    }

    fn summary(&self) -> String {
        let state = if self.animating { "loading" } else { "idle" };
        state.to_string()
    }

    fn foreground(&self) -> Option<Rgba> {
        self.color
    }

    themeable_any!();
}

/// Pull-to-refresh control
#[derive(Debug, Clone, Default)]
pub struct RefreshControl {
    pub tint: Option<Rgba>,
    pub refreshing: bool,
}

impl Themeable for RefreshControl {
    fn kind(&self) -> &'static str {
        "refresh-control"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.tint = Some(theme.palette.body_text);
    }

    fn foreground(&self) -> Option<Rgba> {
        self.tint
    }

    themeable_any!();
}
