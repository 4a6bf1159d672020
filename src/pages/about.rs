use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::render_context::RenderContext;
use crate::state::Section;
use crate::ui_utils::themed_block;

#[derive(Debug, Default)]
pub struct AboutPage;

impl AboutPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = themed_block("About", &ctx.palette, ctx.section_revealed(Section::About));
        let mut lines = Vec::new();
        for paragraph in &ctx.content.about {
            lines.push(Line::from(paragraph.as_str()));
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}
