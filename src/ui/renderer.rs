// ui/renderer.rs - Ratatui-based renderer for the preview screen

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};

use crate::ui::preview::TreePreview;
use crate::ui::view::View;

/// Draws a view tree plus a one-line status bar
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiRenderer {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, root: &View, status: &str) -> io::Result<()> {
        let theme = root.resolve_effective_theme();

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(f.size());

            f.render_widget(TreePreview::new(root), chunks[0]);

            let status_line = Line::from(format!(" {} | theme: {}", status, theme.name)).style(
                Style::default()
                    .bg(theme.palette.focused_background.to_color())
                    .fg(theme.palette.body_text.to_color()),
            );
            f.render_widget(Paragraph::new(status_line), chunks[1]);
        })?;
        Ok(())
    }
}
