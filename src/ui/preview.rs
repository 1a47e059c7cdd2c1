// ui/preview.rs - Draws a themed view tree as an indented outline

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::view::View;

/// One line per view, pre-order, indented by depth and drawn in the
/// colors the view was styled with. Transparent views show the color of
/// the nearest painted ancestor.
pub struct TreePreview<'a> {
    pub root: &'a View,
}

impl<'a> TreePreview<'a> {
    pub fn new(root: &'a View) -> Self {
        Self { root }
    }

    /// Outline text without styling, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.root.walk(|view, depth| lines.push(outline_text(view, depth)));
        lines
    }
}

fn outline_text(view: &View, depth: usize) -> String {
    let summary = view.summary();
    if summary.is_empty() {
        format!("{}{}", "  ".repeat(depth), view.kind())
    } else {
        format!("{}{} {}", "  ".repeat(depth), view.kind(), summary)
    }
}

impl Widget for TreePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut rows = Vec::new();
        let mut painted: Vec<Color> = Vec::new();

        self.root.walk(|view, depth| {
            painted.truncate(depth);
            let background = view.background();
            let bg = if background.is_transparent() {
                painted.last().copied().unwrap_or(Color::Reset)
            } else {
                background.to_color()
            };
            painted.push(bg);

            let mut style = Style::default().bg(bg);
            if let Some(fg) = view.foreground() {
                style = style.fg(fg.to_color());
            }
            rows.push((outline_text(view, depth), style));
        });

        for (row, (text, style)) in rows.into_iter().take(area.height as usize).enumerate() {
            let width = area.width as usize;
            let chars = text.chars().count();
            let padded = if chars < width {
                format!("{}{}", text, " ".repeat(width - chars))
            } else {
                text
            };
            let line = Line::from(Span::styled(padded, style));
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{Rgba, Theme};
    use crate::ui::theme_registry::ThemeRegistry;
    use crate::ui::widgets::{Container, Label};
    use std::rc::Rc;

    #[test]
    fn test_outline_lines() {
        let registry = Rc::new(ThemeRegistry::new(Theme::light()));
        let root = View::new(&registry, Container::new("screen"));
        let group = View::new(&registry, Container::default());
        group.add_child(View::new(&registry, Label::new("hello")));
        root.add_child(group);

        let lines = TreePreview::new(&root).lines();
        assert_eq!(lines, vec!["container screen", "  container", "    label hello"]);
    }

    #[test]
    fn test_render_uses_styled_colors() {
        let registry = Rc::new(ThemeRegistry::new(Theme::dark()));
        let root = View::new(&registry, Container::new("screen"));
        root.set_background(Rgba::rgb(0, 0, 0));
        root.add_child(View::new(&registry, Label::new("hello")));
        root.apply_theme(&Theme::dark());

        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);
        TreePreview::new(&root).render(area, &mut buf);

        let dark = Theme::dark();
        let bg = dark.palette.background_color.to_color();
        assert_eq!(buf.get(0, 0).symbol(), "c");
        assert_eq!(buf.get(0, 0).bg, bg);
        assert_eq!(buf.get(2, 1).symbol(), "l");
        assert_eq!(buf.get(2, 1).fg, dark.palette.title_text.to_color());
        // Transparent label inherits the container's painted color.
        assert_eq!(buf.get(2, 1).bg, bg);
        assert_eq!(buf.get(0, 2).symbol(), " ");
    }

    #[test]
    fn test_non_ascii_row_fills_width() {
        let registry = Rc::new(ThemeRegistry::new(Theme::dark()));
        let root = View::new(&registry, Label::new("Sélectionner"));
        root.set_background(Rgba::rgb(0, 0, 0));
        root.apply_theme(&Theme::dark());

        let area = Rect::new(0, 0, 24, 1);
        let mut buf = Buffer::empty(area);
        TreePreview::new(&root).render(area, &mut buf);

        let bg = Theme::dark().palette.background_color.to_color();
        assert_eq!(buf.get(23, 0).bg, bg);
    }
}
