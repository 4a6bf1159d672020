use std::time::Duration;

use ratatui::layout::{Position, Rect};

use crate::data::Portfolio;
use crate::state::{CursorFollower, LoadingPhase, Palette, RevealTracker, Section, SliderView};

/// Clickable things on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    NavLink(usize),
    ThemeToggle,
    MenuButton,
    SlidePrevious,
    SlideNext,
    Card(usize),
    Skill(usize),
}

/// Regions recorded while drawing a frame, topmost last.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, area: Rect, hit: Hit) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, hit));
        }
    }

    pub fn at(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, hit)| *hit)
    }
}

/// Centralized context for rendering pages, reducing parameter proliferation
pub struct RenderContext<'a> {
    pub content: &'a Portfolio,
    pub palette: Palette,
    pub now: Duration,

    // Navigation
    pub section: Section,
    pub active_link: usize,
    pub compact_nav: bool,
    pub menu_open: bool,
    pub navbar_elevated: bool,
    pub theme_icon: &'static str,

    // Hero
    pub typed_text: String,

    // Slider
    pub slider: SliderView,
    pub slider_first: usize,
    pub slider_visible: usize,
    pub track_offset_columns: f64,
    pub card_slot_columns: u16,

    // Reveal
    pub reveal: &'a RevealTracker,
    pub first_skill_target: usize,

    // Overlays
    pub cursor: CursorFollower,
    pub loading: LoadingPhase,
    pub show_help: bool,
    pub status: &'a str,
}

impl RenderContext<'_> {
    /// Whether the section's entrance has played.
    pub fn section_revealed(&self, section: Section) -> bool {
        let target = if section.index() <= Section::Skills.index() {
            section.index()
        } else {
            section.index() + self.content.skills.len()
        };
        self.reveal
            .targets()
            .get(target)
            .map(|t| t.is_revealed())
            .unwrap_or(true)
    }

    /// Whether skill `index` has finished its staggered delay.
    pub fn skill_shown(&self, index: usize) -> bool {
        self.reveal
            .targets()
            .get(self.first_skill_target + index)
            .map(|t| t.is_shown_at(self.now))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_map_topmost_wins() {
        let mut map = HitMap::new();
        map.push(Rect::new(0, 0, 20, 10), Hit::Card(0));
        map.push(Rect::new(5, 5, 3, 1), Hit::SlideNext);
        assert_eq!(map.at(6, 5), Some(Hit::SlideNext));
        assert_eq!(map.at(1, 1), Some(Hit::Card(0)));
        assert_eq!(map.at(30, 1), None);
    }

    #[test]
    fn test_hit_map_skips_empty_regions() {
        let mut map = HitMap::new();
        map.push(Rect::new(2, 2, 0, 4), Hit::ThemeToggle);
        assert_eq!(map.at(2, 2), None);
    }
}
