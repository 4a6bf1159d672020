use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::render_context::{Hit, HitMap, RenderContext};
use crate::state::Section;

const LINK_GAP: u16 = 3;

#[derive(Debug, Default)]
pub struct Navbar;

impl Navbar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext, hits: &mut HitMap) {
        let palette = ctx.palette;
        let border = if ctx.navbar_elevated {
            palette.accent
        } else {
            palette.muted
        };
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::new().fg(border))
            .style(Style::new().fg(palette.text).bg(palette.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = Span::styled(ctx.content.owner.as_str(), Style::new().fg(palette.accent).bold());
        let brand_width = brand.width() as u16;
        frame.render_widget(Paragraph::new(Line::from(brand)), inner);

        // Right side: theme toggle, then the menu button on compact layouts
        let mut right = inner.right();
        if ctx.compact_nav {
            let menu_label = if ctx.menu_open { "[✕]" } else { "[≡]" };
            let width = Span::raw(menu_label).width() as u16;
            right = right.saturating_sub(width);
            let menu_area = Rect::new(right, inner.y, width, 1).intersection(inner);
            frame.render_widget(Paragraph::new(menu_label), menu_area);
            hits.push(menu_area, Hit::MenuButton);
            right = right.saturating_sub(1);
        }
        let theme_label = format!("[{}]", ctx.theme_icon);
        let width = Span::raw(theme_label.as_str()).width() as u16;
        right = right.saturating_sub(width);
        let theme_area = Rect::new(right, inner.y, width, 1).intersection(inner);
        frame.render_widget(Paragraph::new(theme_label), theme_area);
        hits.push(theme_area, Hit::ThemeToggle);

        if ctx.compact_nav {
            return;
        }

        let mut x = inner.x + brand_width + LINK_GAP * 2;
        for (index, section) in Section::ALL.iter().enumerate() {
            let label = format!("{} {}", index + 1, section.title());
            let width = Span::raw(label.as_str()).width() as u16;
            if x + width >= right {
                break;
            }
            let style = if index == ctx.active_link {
                Style::new().fg(palette.accent).bold().underlined()
            } else {
                Style::new().fg(palette.muted)
            };
            let link_area = Rect::new(x, inner.y, width, 1);
            frame.render_widget(Paragraph::new(Span::styled(label, style)), link_area);
            hits.push(link_area, Hit::NavLink(index));
            x += width + LINK_GAP;
        }
    }

    /// Drop-down link list for compact layouts.
    pub fn render_menu(&self, frame: &mut Frame, below: Rect, ctx: &RenderContext, hits: &mut HitMap) {
        if !ctx.compact_nav || !ctx.menu_open {
            return;
        }
        let palette = ctx.palette;
        let height = Section::ALL.len() as u16 + 2;
        let width = 20.min(below.width);
        let area = Rect::new(below.right().saturating_sub(width), below.y, width, height)
            .intersection(below);

        let items: Vec<ListItem> = Section::ALL
            .iter()
            .map(|s| ListItem::new(s.title()))
            .collect();
        let mut state = ListState::default().with_selected(Some(ctx.active_link));
        frame.render_widget(Clear, area);
        frame.render_stateful_widget(
            List::new(items)
                .block(
                    Block::bordered()
                        .title("Menu")
                        .border_style(Style::new().fg(palette.accent)),
                )
                .style(Style::new().fg(palette.text).bg(palette.background))
                .highlight_style(Style::new().reversed())
                .highlight_symbol(">> "),
            area,
            &mut state,
        );

        for index in 0..Section::ALL.len() {
            let row = area.y + 1 + index as u16;
            if row + 1 >= area.bottom() {
                break;
            }
            hits.push(Rect::new(area.x + 1, row, area.width.saturating_sub(2), 1), Hit::NavLink(index));
        }
    }
}
