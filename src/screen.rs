use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::Line,
    widgets::Block,
    Frame,
};

use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::help::HelpPage;
use crate::pages::home::HomePage;
use crate::pages::loading::LoadingPage;
use crate::pages::navbar::Navbar;
use crate::pages::projects::ProjectsPage;
use crate::pages::skills::SkillsPage;
use crate::render_context::{HitMap, RenderContext};
use crate::state::Section;

pub const NAVBAR_ROWS: u16 = 2;

#[derive(Debug, Default)]
pub struct Screen {
    navbar: Navbar,
    home: HomePage,
    about: AboutPage,
    skills: SkillsPage,
    projects: ProjectsPage,
    contact: ContactPage,
    help: HelpPage,
    loading: LoadingPage,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the page and returns the clickable regions of this frame.
    pub fn render(&mut self, frame: &mut Frame, ctx: &RenderContext) -> HitMap {
        let mut hits = HitMap::new();
        let area = frame.area();
        let palette = ctx.palette;
        frame.render_widget(
            Block::default().style(Style::new().fg(palette.text).bg(palette.background)),
            area,
        );

        // navbar, section body, status line
        let [nav_area, body, status_area] = Layout::vertical([
            Constraint::Length(NAVBAR_ROWS),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.navbar.render(frame, nav_area, ctx, &mut hits);

        match ctx.section {
            Section::Home => self.home.render(frame, body, ctx),
            Section::About => self.about.render(frame, body, ctx),
            Section::Skills => self.skills.render(frame, body, ctx, &mut hits),
            Section::Projects => self.projects.render(frame, body, ctx, &mut hits),
            Section::Contact => self.contact.render(frame, body, ctx),
        }

        self.navbar.render_menu(frame, body, ctx, &mut hits);

        let status_line = Line::from(format!(
            "{}  |  ↑↓ Sections  ←→ Projects  t Theme  ? Help  q Quit",
            ctx.status
        ))
        .style(Style::new().fg(palette.background).bg(palette.muted));
        frame.render_widget(status_line, status_area);

        if ctx.show_help {
            self.help.render(frame, body, &palette);
        }

        self.loading.render(frame, area, ctx);

        if let Some((column, row)) = ctx.cursor.position() {
            let position = Position::new(column, row);
            if area.contains(position) {
                let cell = Rect::new(column, row, 1, 1);
                frame.render_widget(
                    Line::from(ctx.cursor.glyph()).style(Style::new().fg(palette.accent)),
                    cell,
                );
            }
        }

        hits
    }
}
