use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::render_context::RenderContext;
use crate::state::Section;
use crate::ui_utils::themed_block;

#[derive(Debug, Default)]
pub struct ContactPage;

impl ContactPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let lines: Vec<Line> = ctx
            .content
            .contact
            .iter()
            .map(|c| {
                Line::from(vec![
                    Span::styled(format!("{:<10}", c.label), Style::new().fg(palette.accent).bold()),
                    Span::raw(c.value.as_str()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(themed_block(
                "Contact",
                &palette,
                ctx.section_revealed(Section::Contact),
            )),
            area,
        );
    }
}
