//! Section navigation state.
//!
//! The page scrolls one whole section per gesture. Wheel, keyboard and swipe
//! input all funnel into [`SectionNavigator::scroll_to`], which holds a lock
//! for the duration of the smooth scroll so a single flick cannot skip
//! several sections.

use std::time::Duration;

use tracing::debug;

use crate::scheduler::{Scheduler, TaskHandle};

/// How long a section jump blocks further scroll input.
pub const SCROLL_LOCK: Duration = Duration::from_millis(1000);
/// Minimum vertical travel, in pixels, for a swipe to count.
pub const SWIPE_THRESHOLD: f64 = 50.0;
/// Viewports at or below this width use the collapsible menu.
pub const MOBILE_MENU_MAX_WIDTH: f64 = 768.0;

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Skills => 2,
            Section::Projects => 3,
            Section::Contact => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.anchor() == anchor)
    }
}

/// Keys that move between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
}

/// Vertical extent of a section on the page, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

/// Timer tasks owned by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTask {
    ReleaseScrollLock,
}

#[derive(Debug, Clone)]
pub struct SectionNavigator {
    current: usize,
    total: usize,
    is_scrolling: bool,
    unlock_timer: Option<TaskHandle>,
    touch_start_y: f64,
    menu_open: bool,
}

impl SectionNavigator {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            is_scrolling: false,
            unlock_timer: None,
            touch_start_y: 0.0,
            menu_open: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_section(&self) -> Option<Section> {
        Section::from_index(self.current)
    }

    /// Index of the highlighted nav link.
    pub fn active_link(&self) -> usize {
        self.current
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Jumps to a section and locks scroll input while the page moves.
    ///
    /// Out-of-range indices are ignored. Returns `true` if the jump happened.
    pub fn scroll_to<T: From<SectionTask>>(
        &mut self,
        index: isize,
        scheduler: &mut Scheduler<T>,
    ) -> bool {
        if index < 0 || index as usize >= self.total {
            return false;
        }
        self.is_scrolling = true;
        self.current = index as usize;
        if let Some(handle) = self.unlock_timer.take() {
            scheduler.cancel(handle);
        }
        self.unlock_timer = Some(scheduler.schedule(SCROLL_LOCK, SectionTask::ReleaseScrollLock));
        debug!(section = self.current, "scrolled to section");
        true
    }

    pub fn on_wheel<T: From<SectionTask>>(&mut self, delta_y: f64, scheduler: &mut Scheduler<T>) -> bool {
        if self.is_scrolling {
            return false;
        }
        let step = if delta_y > 0.0 { 1 } else { -1 };
        self.scroll_to(self.current as isize + step, scheduler)
    }

    pub fn on_key<T: From<SectionTask>>(&mut self, key: ScrollKey, scheduler: &mut Scheduler<T>) -> bool {
        if self.is_scrolling {
            return false;
        }
        let step = match key {
            ScrollKey::ArrowDown | ScrollKey::PageDown => 1,
            ScrollKey::ArrowUp | ScrollKey::PageUp => -1,
        };
        self.scroll_to(self.current as isize + step, scheduler)
    }

    pub fn on_touch_start(&mut self, y: f64) {
        self.touch_start_y = y;
    }

    pub fn on_touch_end<T: From<SectionTask>>(&mut self, y: f64, scheduler: &mut Scheduler<T>) -> bool {
        if self.is_scrolling {
            return false;
        }
        let diff = self.touch_start_y - y;
        if diff.abs() <= SWIPE_THRESHOLD {
            return false;
        }
        let step = if diff > 0.0 { 1 } else { -1 };
        self.scroll_to(self.current as isize + step, scheduler)
    }

    /// Tracks free scrolling: the section whose top is within a third of its
    /// height of `position` becomes current.
    pub fn on_scroll(&mut self, position: f64, spans: &[SectionSpan]) {
        if self.is_scrolling {
            return;
        }
        for (index, span) in spans.iter().enumerate() {
            let band = span.height / 3.0;
            if position >= span.top - band && position < span.top + band {
                self.current = index;
            }
        }
    }

    /// Follows a nav link. Unknown anchors are ignored; the mobile menu closes
    /// on narrow viewports either way.
    pub fn follow_link<T: From<SectionTask>>(
        &mut self,
        anchor: &str,
        viewport_width: f64,
        scheduler: &mut Scheduler<T>,
    ) -> bool {
        let moved = match Section::from_anchor(anchor) {
            Some(section) if section.index() < self.total => {
                self.scroll_to(section.index() as isize, scheduler)
            }
            _ => false,
        };
        if viewport_width <= MOBILE_MENU_MAX_WIDTH {
            self.menu_open = false;
        }
        moved
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn handle_task(&mut self, task: SectionTask) {
        match task {
            SectionTask::ReleaseScrollLock => {
                self.unlock_timer = None;
                self.is_scrolling = false;
            }
        }
    }
}

/// Whether the navbar shows its scrolled style.
pub fn navbar_elevated(scroll_position: f64) -> bool {
    scroll_position > 0.0
}
