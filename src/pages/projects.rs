use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::data::Project;
use crate::render_context::{Hit, HitMap, RenderContext};
use crate::state::{Palette, Section};
use crate::ui_utils::{clip_horizontal, themed_block};

const BUTTON_COLUMNS: u16 = 4;

#[derive(Debug, Default)]
pub struct ProjectsPage;

impl ProjectsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext, hits: &mut HitMap) {
        let palette = ctx.palette;
        let total = ctx.content.projects.len();
        let mut block = themed_block("Projects", &palette, ctx.section_revealed(Section::Projects));
        if total > 0 {
            let last = (ctx.slider_first + ctx.slider_visible).min(total);
            block = block.title_bottom(
                Line::from(format!(" {}-{} of {} ", ctx.slider_first + 1, last, total)).right_aligned(),
            );
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if total == 0 {
            frame.render_widget(
                Paragraph::new("No projects yet")
                    .alignment(Alignment::Center)
                    .style(Style::new().fg(palette.muted)),
                inner,
            );
            return;
        }

        let [prev_area, track, next_area] = Layout::horizontal([
            Constraint::Length(BUTTON_COLUMNS),
            Constraint::Min(0),
            Constraint::Length(BUTTON_COLUMNS),
        ])
        .areas(inner);

        self.render_button(frame, prev_area, " ◀ ", ctx.slider.prev_disabled, &palette);
        if !ctx.slider.prev_disabled {
            hits.push(prev_area, Hit::SlidePrevious);
        }
        self.render_button(frame, next_area, " ▶ ", ctx.slider.next_disabled, &palette);
        if !ctx.slider.next_disabled {
            hits.push(next_area, Hit::SlideNext);
        }

        let slot = ctx.card_slot_columns as i32;
        let offset = ctx.track_offset_columns.round() as i32;
        for (index, project) in ctx.content.projects.iter().enumerate() {
            let x = index as i32 * slot + offset;
            // one column of margin on each side
            let Some(card_area) = clip_horizontal(track, x + 1, (slot - 2).max(1) as u16) else {
                continue;
            };
            self.render_card(frame, card_area, project, &palette);
            hits.push(card_area, Hit::Card(index));
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, label: &str, disabled: bool, palette: &Palette) {
        let style = if disabled {
            Style::new().fg(palette.disabled)
        } else {
            Style::new().fg(palette.accent).bold()
        };
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
        frame.render_widget(Paragraph::new(Span::styled(label, style)), middle);
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, project: &Project, palette: &Palette) {
        let mut lines = vec![
            Line::from(Span::styled(project.description.as_str(), Style::new().fg(palette.text))),
            Line::from(""),
            Line::from(Span::styled(project.tech.join(" · "), Style::new().fg(palette.accent))),
        ];
        if let Some(link) = &project.link {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(link.as_str(), Style::new().fg(palette.muted).underlined())));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .title(project.title.as_str())
                        .border_style(Style::new().fg(palette.muted)),
                ),
            area,
        );
    }
}
