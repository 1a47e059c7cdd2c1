// ui/widgets/table.rs - Table view and its cells

use crate::ui::theme::{Rgba, Theme};
use crate::ui::view::{Surface, Themeable};

/// Grouped tables on light themes use the platform's grouped gray
pub const LIGHT_GROUPED_BACKGROUND: Rgba = Rgba::rgb(0xef, 0xef, 0xf4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    #[default]
    Plain,
    Grouped,
}

#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub style: TableStyle,
    pub separator_color: Option<Rgba>,
}

impl TableView {
    pub fn new(style: TableStyle) -> Self {
        Self {
            style,
            separator_color: None,
        }
    }
}

impl Themeable for TableView {
    fn kind(&self) -> &'static str {
        "table"
    }

    fn apply_theme(&mut self, theme: &Theme, surface: &mut Surface) {
        surface.background = match (self.style, theme.is_dark()) {
            (TableStyle::Grouped, true) => theme.palette.focused_background,
            (TableStyle::Grouped, false) => LIGHT_GROUPED_BACKGROUND,
            (TableStyle::Plain, _) => theme.palette.background_color,
        };
        self.separator_color = Some(theme.palette.muted_accent);
    }

    fn summary(&self) -> String {
        match self.style {
            TableStyle::Plain => "plain".to_string(),
            TableStyle::Grouped => "grouped".to_string(),
        }
    }

    fn foreground(&self) -> Option<Rgba> {
        self.separator_color
    }

    themeable_any!();
}

/// Row with a title and an optional detail line
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    pub title: String,
    pub detail: Option<String>,
    pub selected: bool,
    pub title_color: Option<Rgba>,
    pub detail_color: Option<Rgba>,
}

impl TableCell {
    pub fn new(title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            title: title.into(),
            detail,
            ..Default::default()
        }
    }
}

impl Themeable for TableCell {
    fn kind(&self) -> &'static str {
        "cell"
    }

    fn apply_theme(&mut self, theme: &Theme, _surface: &mut Surface) {
        self.title_color = Some(theme.palette.title_text);
        if self.detail.is_some() {
            self.detail_color = Some(theme.palette.auxiliary_text);
        }
    }

    fn summary(&self) -> String {
        let mark = if self.selected { "* " } else { "" };
        match &self.detail {
            Some(detail) => format!("{}{} ({})", mark, self.title, detail),
            None => format!("{}{}", mark, self.title),
        }
    }

    fn foreground(&self) -> Option<Rgba> {
        self.title_color
    }

    themeable_any!();
}
