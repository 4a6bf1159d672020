//! Terminal geometry expressed in page pixels.
//!
//! The page logic thinks in browser pixels (breakpoints at 768 and 1024,
//! a 50px swipe threshold). The terminal is measured in cells, so every
//! measurement goes through a fixed cell size.

use crate::state::slider::{compute_visible_count, parse_px};
use crate::state::{CardBox, LayoutProbe, SectionSpan, VerticalSpan};

/// Columns taken by the slider's borders and button gutters.
const TRACK_CHROME_COLUMNS: u16 = 10;
/// Rows taken by the navbar and status line.
const PAGE_CHROME_ROWS: u16 = 3;
/// Rows above the first skill item inside the skills section.
pub const SKILLS_HEADER_ROWS: u16 = 2;
/// Rows per skill item.
pub const SKILL_ROWS: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalViewport {
    pub columns: u16,
    pub rows: u16,
    pub cell_width_px: f64,
    pub cell_height_px: f64,
    /// Fixed viewport width, ignoring the terminal size.
    pub width_override: Option<f64>,
    pub card_margin_px: f64,
    pub card_count: usize,
}

impl TerminalViewport {
    pub fn new(columns: u16, rows: u16, cell_width_px: f64, cell_height_px: f64, card_margin: &str) -> Self {
        Self {
            columns,
            rows,
            cell_width_px,
            cell_height_px,
            width_override: None,
            card_margin_px: parse_px(card_margin),
            card_count: 0,
        }
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
    }

    pub fn width_px(&self) -> f64 {
        self.width_override
            .unwrap_or(self.columns as f64 * self.cell_width_px)
    }

    /// Height of one full-screen section in pixels.
    pub fn section_height_px(&self) -> f64 {
        self.rows.saturating_sub(PAGE_CHROME_ROWS).max(1) as f64 * self.cell_height_px
    }

    pub fn rows_to_px(&self, rows: u16) -> f64 {
        rows as f64 * self.cell_height_px
    }

    pub fn px_to_columns(&self, px: f64) -> f64 {
        px / self.cell_width_px
    }

    /// Columns available to the card track.
    pub fn track_columns(&self) -> u16 {
        self.columns.saturating_sub(TRACK_CHROME_COLUMNS)
    }

    /// Columns given to each card, margins included.
    pub fn card_slot_columns(&self) -> u16 {
        let visible = compute_visible_count(self.width_px()) as u16;
        (self.track_columns() / visible).max(1)
    }

    pub fn section_spans(&self, count: usize) -> Vec<SectionSpan> {
        let height = self.section_height_px();
        (0..count)
            .map(|i| SectionSpan {
                top: i as f64 * height,
                height,
            })
            .collect()
    }

    /// Span of the `index`th skill item inside the section starting at `section_top`.
    pub fn skill_span(&self, section_top: f64, index: usize) -> VerticalSpan {
        let row = SKILLS_HEADER_ROWS as f64 + index as f64 * SKILL_ROWS as f64;
        VerticalSpan::new(section_top + row * self.cell_height_px, self.rows_to_px(SKILL_ROWS))
    }
}

impl LayoutProbe for TerminalViewport {
    fn viewport_width(&self) -> f64 {
        self.width_px()
    }

    fn card_count(&self) -> usize {
        self.card_count
    }

    fn first_card(&self) -> Option<CardBox> {
        if self.card_count == 0 {
            return None;
        }
        let slot = self.card_slot_columns() as f64 * self.cell_width_px;
        Some(CardBox::new(
            slot - 2.0 * self.card_margin_px,
            self.card_margin_px,
            self.card_margin_px,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(columns: u16) -> TerminalViewport {
        let mut v = TerminalViewport::new(columns, 40, 8.0, 16.0, "8px");
        v.card_count = 5;
        v
    }

    #[test]
    fn test_width_from_columns() {
        assert_eq!(viewport(96).width_px(), 768.0);
        assert_eq!(viewport(160).width_px(), 1280.0);
    }

    #[test]
    fn test_width_override() {
        let mut v = viewport(80);
        v.width_override = Some(1100.0);
        assert_eq!(v.viewport_width(), 1100.0);
        assert_eq!(v.card_slot_columns(), 70 / 3);
    }

    #[test]
    fn test_card_advance_matches_slot() {
        let v = viewport(130);
        // 1040px -> 3 cards, track 120 columns -> slot 40
        assert_eq!(v.card_slot_columns(), 40);
        let card = v.first_card().unwrap();
        assert_eq!(card.advance(), 320.0);
        assert_eq!(card.width, 304.0);
    }

    #[test]
    fn test_unparsable_margin_is_zero() {
        let mut v = TerminalViewport::new(100, 40, 8.0, 16.0, "auto");
        v.card_count = 2;
        let card = v.first_card().unwrap();
        assert_eq!(card.margin_left, 0.0);
        assert!(card.advance().is_finite());
    }

    #[test]
    fn test_no_cards_no_box() {
        let mut v = viewport(100);
        v.card_count = 0;
        assert!(v.first_card().is_none());
    }

    #[test]
    fn test_section_spans() {
        let v = viewport(100);
        let spans = v.section_spans(3);
        assert_eq!(spans[1].top, 592.0);
        assert_eq!(spans[1].height, 592.0);
    }
}
