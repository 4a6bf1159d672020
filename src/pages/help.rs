use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::state::Palette;
use crate::ui_utils::centered;

#[derive(Debug, Default)]
pub struct HelpPage;

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let area = centered(area, 60, 17);
        frame.render_widget(Clear, area);
        // Fill the overlay to avoid a transparent background bleeding through
        frame.render_widget(Block::default().style(Style::new().bg(palette.background)), area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(area);

        let key = |k: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("{:<14}", k), Style::new().bold().fg(palette.accent)),
                Span::styled(what, Style::new().fg(palette.text)),
            ])
        };

        let nav_help = vec![
            key("↑↓ / k j", "Previous / next section"),
            key("PgUp PgDn", "Previous / next section"),
            key("1-5", "Jump to a section"),
            key("Wheel / drag", "Scroll or swipe between sections"),
            key("← → / h l", "Previous / next project"),
            key("m", "Toggle the menu"),
        ];
        frame.render_widget(
            Paragraph::new(nav_help).block(Block::bordered().title("Navigation")),
            sections[0],
        );

        let page_help = vec![
            key("t", "Toggle dark / light theme"),
            key("Click", "Links, buttons and the theme icon"),
            key("?", "Show / hide this help"),
            key("Esc", "Close overlays"),
            key("q / Ctrl-C", "Quit"),
        ];
        frame.render_widget(
            Paragraph::new(page_help).block(Block::bordered().title("Page")),
            sections[1],
        );
    }
}
