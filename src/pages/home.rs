use ratatui::{
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::render_context::RenderContext;
use crate::state::caret_visible;
use crate::ui_utils::centered;

#[derive(Debug, Default)]
pub struct HomePage;

impl HomePage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let caret = if caret_visible(ctx.now) { "▌" } else { " " };
        let lines = vec![
            Line::from(vec![
                Span::styled(ctx.typed_text.as_str(), Style::new().fg(palette.text).bold()),
                Span::styled(caret, Style::new().fg(palette.accent)),
            ]),
            Line::from(""),
            Line::from(Span::styled(ctx.content.tagline.as_str(), Style::new().fg(palette.muted))),
            Line::from(""),
            Line::from(Span::styled(
                "↓ scroll, swipe or press j to explore",
                Style::new().fg(palette.muted).italic(),
            )),
        ];
        let box_area = centered(area, area.width.saturating_sub(4), lines.len() as u16);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            box_area,
        );
    }
}
