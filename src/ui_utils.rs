use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Block,
};

use crate::state::Palette;

/// Creates a bordered block in the page palette, accented when highlighted
pub fn themed_block<'a>(title: &'a str, palette: &Palette, highlighted: bool) -> Block<'a> {
    let border = if highlighted { palette.accent } else { palette.muted };
    Block::bordered()
        .title(title)
        .border_style(Style::new().fg(border))
        .style(Style::new().fg(palette.text).bg(palette.background))
}

/// Places a box of `width` columns starting at `x` (relative to `area.x`,
/// possibly negative) and clips it to `area`
pub fn clip_horizontal(area: Rect, x: i32, width: u16) -> Option<Rect> {
    let left = (area.x as i32 + x).max(area.x as i32);
    let right = (area.x as i32 + x + width as i32).min(area.right() as i32);
    if right <= left {
        return None;
    }
    Some(Rect::new(left as u16, area.y, (right - left) as u16, area.height))
}

/// A rectangle of at most `width` x `height` centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
