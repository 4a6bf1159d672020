use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, Clear},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_SIX};

use crate::render_context::RenderContext;
use crate::state::LoadingPhase;
use crate::ui_utils::centered;

#[derive(Debug, Default)]
pub struct LoadingPage {
    throbber: ThrobberState,
}

impl LoadingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        if ctx.loading == LoadingPhase::Removed {
            return;
        }
        let palette = ctx.palette;
        // while fading only the spinner box stays up
        if ctx.loading == LoadingPhase::Visible {
            frame.render_widget(Clear, area);
            frame.render_widget(Block::default().style(Style::new().bg(palette.background)), area);
        }

        self.throbber.calc_next();
        let spinner_area = centered(area, 16, 1);
        let label = if ctx.loading == LoadingPhase::Hiding {
            "Ready"
        } else {
            "Loading..."
        };
        frame.render_stateful_widget(
            Throbber::default()
                .label(label)
                .style(Style::new().fg(palette.muted).bg(palette.background))
                .throbber_style(Style::new().fg(palette.accent).bold())
                .throbber_set(BRAILLE_SIX),
            spinner_area,
            &mut self.throbber,
        );
    }
}
