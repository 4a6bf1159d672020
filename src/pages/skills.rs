use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::render_context::{Hit, HitMap, RenderContext};
use crate::state::Section;
use crate::ui_utils::themed_block;
use crate::viewport::{SKILLS_HEADER_ROWS, SKILL_ROWS};

const LABEL_COLUMNS: u16 = 14;

#[derive(Debug, Default)]
pub struct SkillsPage;

impl SkillsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext, hits: &mut HitMap) {
        let palette = ctx.palette;
        let block = themed_block("Skills", &palette, ctx.section_revealed(Section::Skills));
        frame.render_widget(block, area);

        for (index, skill) in ctx.content.skills.iter().enumerate() {
            let row = area.y + SKILLS_HEADER_ROWS + index as u16 * SKILL_ROWS;
            if row + 1 >= area.bottom() {
                break;
            }
            let line = Rect::new(area.x + 2, row, area.width.saturating_sub(4), 1);
            hits.push(line, Hit::Skill(index));
            if !ctx.skill_shown(index) {
                continue;
            }

            let label_width = LABEL_COLUMNS.min(line.width);
            frame.render_widget(
                Paragraph::new(skill.name.as_str()).style(Style::new().fg(palette.text)),
                Rect::new(line.x, line.y, label_width, 1),
            );
            let gauge_area = Rect::new(
                line.x + label_width,
                line.y,
                line.width.saturating_sub(label_width),
                1,
            );
            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::new().fg(palette.accent).bg(palette.disabled))
                    .percent(skill.level.min(100) as u16),
                gauge_area,
            );
        }
    }
}
