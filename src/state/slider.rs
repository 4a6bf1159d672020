//! Project card slider state.
//!
//! Presents a window of `visible_count` cards out of the full collection and
//! moves that window one card at a time. The controller never touches the
//! terminal: geometry comes in through [`LayoutProbe`] and timers go through
//! the [`Scheduler`], so all of the pagination arithmetic runs against
//! synthetic measurements in tests.

use std::time::Duration;

use tracing::debug;

use crate::scheduler::{Scheduler, TaskHandle};

/// Lock window after a navigation action; matches the slide transition.
pub const TRANSITION: Duration = Duration::from_millis(600);
/// Trailing debounce applied to resize notifications.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);
/// Delay before the first render after setup.
pub const ACTIVATION_DELAY: Duration = Duration::from_millis(100);

const MOBILE_MAX_WIDTH: f64 = 768.0;
const TABLET_MAX_WIDTH: f64 = 1024.0;
const DEFAULT_VISIBLE_COUNT: usize = 3;

/// Breakpoint class derived from the viewport width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn visible_count(self) -> usize {
        match self {
            ViewportClass::Mobile => 1,
            ViewportClass::Tablet => 2,
            ViewportClass::Desktop => 3,
        }
    }
}

/// Number of cards shown side by side at the given viewport width.
pub fn compute_visible_count(width: f64) -> usize {
    ViewportClass::from_width(width).visible_count()
}

/// Parses a CSS-like length such as `"12px"` or `"8"`.
///
/// Anything that is not a finite number parses as `0.0`.
pub fn parse_px(value: &str) -> f64 {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Rendered box of a single card, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBox {
    pub width: f64,
    pub margin_left: f64,
    pub margin_right: f64,
}

impl CardBox {
    pub fn new(width: f64, margin_left: f64, margin_right: f64) -> Self {
        Self {
            width,
            margin_left,
            margin_right,
        }
    }

    /// Horizontal distance from one card to the next.
    pub fn advance(&self) -> f64 {
        finite_or_zero(self.width) + finite_or_zero(self.margin_left) + finite_or_zero(self.margin_right)
    }
}

/// Read-only view of the environment the slider lays itself out in.
pub trait LayoutProbe {
    /// Viewport width in pixels.
    fn viewport_width(&self) -> f64;
    /// Number of cards in the collection.
    fn card_count(&self) -> usize;
    /// Box of the first card, if one can be measured.
    fn first_card(&self) -> Option<CardBox>;
}

/// Visual state written back to the page after every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderView {
    /// Horizontal offset of the card track in pixels (zero or negative).
    pub offset: f64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl SliderView {
    fn stationary() -> Self {
        Self {
            offset: 0.0,
            prev_disabled: true,
            next_disabled: true,
        }
    }
}

/// Timer tasks owned by the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderTask {
    ReleaseLock,
    ResizeSettled,
    Activate,
}

/// Pagination state for one slider instance.
#[derive(Debug, Clone)]
pub struct SliderController {
    current_index: usize,
    visible_count: usize,
    is_animating: bool,
    resize_timer: Option<TaskHandle>,
    view: SliderView,
}

impl Default for SliderController {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderController {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            visible_count: DEFAULT_VISIBLE_COUNT,
            is_animating: false,
            resize_timer: None,
            view: SliderView::stationary(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Output of the most recent render.
    pub fn view(&self) -> SliderView {
        self.view
    }

    /// Schedules the initial render.
    pub fn activate<T: From<SliderTask>>(&mut self, scheduler: &mut Scheduler<T>) {
        scheduler.schedule(ACTIVATION_DELAY, SliderTask::Activate);
    }

    /// Recomputes the layout and returns the new view.
    pub fn render(&mut self, probe: &impl LayoutProbe) -> SliderView {
        let total = probe.card_count();
        if total == 0 {
            self.current_index = 0;
            self.view = SliderView::stationary();
            return self.view;
        }

        self.visible_count = compute_visible_count(probe.viewport_width());
        let max_index = total.saturating_sub(self.visible_count);
        self.current_index = self.current_index.min(max_index);

        let advance = probe.first_card().map(|card| card.advance()).unwrap_or(0.0);
        let offset = -(self.current_index as f64) * advance;

        self.view = SliderView {
            // avoid handing out -0.0 at the first page
            offset: if offset == 0.0 { 0.0 } else { offset },
            prev_disabled: self.current_index == 0,
            next_disabled: self.current_index >= max_index,
        };
        self.view
    }

    /// Moves the window one card back.
    ///
    /// Returns `true` if the index changed.
    pub fn go_previous<T: From<SliderTask>>(
        &mut self,
        probe: &impl LayoutProbe,
        scheduler: &mut Scheduler<T>,
    ) -> bool {
        if self.is_animating || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.start_transition(probe, scheduler);
        true
    }

    /// Moves the window one card forward.
    ///
    /// Returns `true` if the index changed.
    pub fn go_next<T: From<SliderTask>>(
        &mut self,
        probe: &impl LayoutProbe,
        scheduler: &mut Scheduler<T>,
    ) -> bool {
        let max_index = probe.card_count().saturating_sub(self.visible_count);
        if self.is_animating || self.current_index >= max_index {
            return false;
        }
        self.current_index += 1;
        self.start_transition(probe, scheduler);
        true
    }

    /// Restarts the resize debounce; the layout is recomputed once resizing stops.
    pub fn on_viewport_resize<T: From<SliderTask>>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(handle) = self.resize_timer.take() {
            scheduler.cancel(handle);
        }
        self.resize_timer = Some(scheduler.schedule(RESIZE_DEBOUNCE, SliderTask::ResizeSettled));
    }

    /// Dispatches a timer task that fired.
    pub fn handle_task(&mut self, task: SliderTask, probe: &impl LayoutProbe) {
        match task {
            SliderTask::ReleaseLock => self.is_animating = false,
            SliderTask::ResizeSettled => {
                self.resize_timer = None;
                self.settle_resize(probe);
            }
            SliderTask::Activate => {
                self.render(probe);
            }
        }
    }

    fn settle_resize(&mut self, probe: &impl LayoutProbe) {
        let old = self.visible_count;
        let new = compute_visible_count(probe.viewport_width());
        if old != new {
            self.current_index = self.current_index * old / new;
            self.visible_count = new;
            debug!(old, new, index = self.current_index, "slider breakpoint changed");
        }
        self.render(probe);
    }

    fn start_transition<T: From<SliderTask>>(
        &mut self,
        probe: &impl LayoutProbe,
        scheduler: &mut Scheduler<T>,
    ) {
        self.is_animating = true;
        self.render(probe);
        scheduler.schedule(TRANSITION, SliderTask::ReleaseLock);
        debug!(index = self.current_index, "slider moved");
    }
}

/// Eased interpolation of the track offset between two renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTween {
    from: f64,
    to: f64,
    started: Duration,
}

impl OffsetTween {
    pub fn settled(offset: f64) -> Self {
        Self {
            from: offset,
            to: offset,
            started: Duration::ZERO,
        }
    }

    /// Starts a new tween from wherever the current one is at `now`.
    pub fn retarget(&mut self, to: f64, now: Duration) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started = now;
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_running(&self, now: Duration) -> bool {
        self.from != self.to && now.saturating_sub(self.started) < TRANSITION
    }

    pub fn value_at(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started).as_secs_f64();
        let t = (elapsed / TRANSITION.as_secs_f64()).clamp(0.0, 1.0);
        // ease-out cubic
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeLayout {
        width: f64,
        cards: usize,
        card: Option<CardBox>,
    }

    impl FakeLayout {
        fn new(width: f64, cards: usize) -> Self {
            Self {
                width,
                cards,
                card: Some(CardBox::new(300.0, 10.0, 10.0)),
            }
        }
    }

    impl LayoutProbe for FakeLayout {
        fn viewport_width(&self) -> f64 {
            self.width
        }
        fn card_count(&self) -> usize {
            self.cards
        }
        fn first_card(&self) -> Option<CardBox> {
            self.card
        }
    }

    fn run(slider: &mut SliderController, s: &mut Scheduler<SliderTask>, layout: &FakeLayout, until: Duration) {
        while let Some(task) = s.next_due(until) {
            slider.handle_task(task, layout);
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_visible_count_steps() {
        assert_eq!(compute_visible_count(500.0), 1);
        assert_eq!(compute_visible_count(800.0), 2);
        assert_eq!(compute_visible_count(1200.0), 3);
        assert_eq!(compute_visible_count(768.0), 1);
        assert_eq!(compute_visible_count(769.0), 2);
        assert_eq!(compute_visible_count(1024.0), 2);
        assert_eq!(compute_visible_count(1025.0), 3);
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("12px"), 12.0);
        assert_eq!(parse_px(" 8 "), 8.0);
        assert_eq!(parse_px("1.5px"), 1.5);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("NaN"), 0.0);
    }

    #[test]
    fn test_advance_coerces_non_finite_margins() {
        let card = CardBox::new(300.0, f64::NAN, 10.0);
        assert_eq!(card.advance(), 310.0);
    }

    #[test]
    fn test_new_default_values() {
        let slider = SliderController::new();
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.visible_count(), 3);
        assert!(!slider.is_animating());
    }

    #[test]
    fn test_render_first_page() {
        let layout = FakeLayout::new(1200.0, 5);
        let mut slider = SliderController::new();
        let view = slider.render(&layout);
        assert_eq!(view.offset, 0.0);
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);
    }

    #[test]
    fn test_go_next_until_end() {
        let layout = FakeLayout::new(1200.0, 5);
        let mut s = Scheduler::new();
        let mut slider = SliderController::new();
        slider.render(&layout);

        assert!(slider.go_next(&layout, &mut s));
        assert_eq!(slider.current_index(), 1);
        assert_eq!(slider.view().offset, -320.0);
        run(&mut slider, &mut s, &layout, ms(600));

        assert!(slider.go_next(&layout, &mut s));
        assert_eq!(slider.current_index(), 2);
        assert!(slider.view().next_disabled);
        run(&mut slider, &mut s, &layout, ms(1200));

        assert!(!slider.go_next(&layout, &mut s));
        assert_eq!(slider.current_index(), 2);
        assert!(slider.view().next_disabled);
        assert!(!slider.view().prev_disabled);
    }

    #[test]
    fn test_go_previous_at_start_is_noop() {
        let layout = FakeLayout::new(1200.0, 5);
        let mut s: Scheduler<SliderTask> = Scheduler::new();
        let mut slider = SliderController::new();
        slider.render(&layout);
        assert!(!slider.go_previous(&layout, &mut s));
        assert_eq!(slider.current_index(), 0);
        assert!(slider.view().prev_disabled);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn test_lock_drops_second_request() {
        let layout = FakeLayout::new(1200.0, 5);
        let mut s = Scheduler::new();
        let mut slider = SliderController::new();
        slider.render(&layout);

        assert!(slider.go_next(&layout, &mut s));
        run(&mut slider, &mut s, &layout, ms(599));
        assert!(slider.is_animating());
        assert!(!slider.go_next(&layout, &mut s));
        assert_eq!(slider.current_index(), 1);

        run(&mut slider, &mut s, &layout, ms(600));
        assert!(!slider.is_animating());
        assert!(slider.go_previous(&layout, &mut s));
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn test_resize_rescales_then_clamps() {
        let mut layout = FakeLayout::new(1200.0, 4);
        let mut s = Scheduler::new();
        let mut slider = SliderController::new();
        slider.render(&layout);
        slider.go_next(&layout, &mut s);
        run(&mut slider, &mut s, &layout, ms(600));
        assert_eq!(slider.current_index(), 1);

        // desktop -> tablet: floor(1 * 3 / 2) = 1, max index is 2
        layout.width = 900.0;
        slider.on_viewport_resize(&mut s);
        run(&mut slider, &mut s, &layout, ms(700));
        assert_eq!(slider.visible_count(), 2);
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn test_resize_rescale_clamped_to_new_max() {
        let mut layout = FakeLayout::new(1200.0, 5);
        let mut s = Scheduler::new();
        let mut slider = SliderController::new();
        slider.render(&layout);
        slider.go_next(&layout, &mut s);
        run(&mut slider, &mut s, &layout, ms(600));
        slider.go_next(&layout, &mut s);
        run(&mut slider, &mut s, &layout, ms(1200));
        assert_eq!(slider.current_index(), 2);

        // floor(2 * 3 / 2) = 3, which is exactly max index 5 - 2
        layout.width = 900.0;
        slider.on_viewport_resize(&mut s);
        run(&mut slider, &mut s, &layout, ms(1300));
        assert_eq!(slider.current_index(), 3);
        assert!(slider.view().next_disabled);

        // with four cards the rescaled 3 clamps to 2
        let mut four = FakeLayout::new(1200.0, 4);
        let mut slider = SliderController::new();
        slider.render(&four);
        slider.go_next(&four, &mut s);
        run(&mut slider, &mut s, &four, ms(1900));
        four.cards = 5;
        slider.go_next(&four, &mut s);
        run(&mut slider, &mut s, &four, ms(2500));
        assert_eq!(slider.current_index(), 2);
        four.cards = 4;
        four.width = 900.0;
        slider.on_viewport_resize(&mut s);
        run(&mut slider, &mut s, &four, ms(2600));
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn test_resize_is_debounced() {
        let mut layout = FakeLayout::new(1200.0, 6);
        let mut s = Scheduler::new();
        let mut slider = SliderController::new();
        slider.render(&layout);

        layout.width = 500.0;
        slider.on_viewport_resize(&mut s);
        run(&mut slider, &mut s, &layout, ms(90));
        slider.on_viewport_resize(&mut s);
        run(&mut slider, &mut s, &layout, ms(180));
        assert_eq!(slider.visible_count(), 3);
        assert_eq!(s.pending(), 1);

        run(&mut slider, &mut s, &layout, ms(190));
        assert_eq!(slider.visible_count(), 1);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn test_no_cards_is_stationary() {
        let layout = FakeLayout::new(1200.0, 0);
        let mut s: Scheduler<SliderTask> = Scheduler::new();
        let mut slider = SliderController::new();
        let view = slider.render(&layout);
        assert_eq!(view, SliderView::stationary());
        assert!(!slider.go_next(&layout, &mut s));
        assert!(!slider.go_previous(&layout, &mut s));
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn test_cards_removed_clamps_index() {
        let mut layout = FakeLayout::new(500.0, 6);
        let mut s = Scheduler::new();
        let mut slider = SliderController::new();
        slider.render(&layout);
        for step in 0..4u64 {
            slider.go_next(&layout, &mut s);
            run(&mut slider, &mut s, &layout, ms(600 * (step + 1)));
        }
        assert_eq!(slider.current_index(), 4);

        layout.cards = 2;
        slider.render(&layout);
        assert_eq!(slider.current_index(), 1);
        layout.cards = 0;
        slider.render(&layout);
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.view().offset, 0.0);
    }

    #[test]
    fn test_unmeasurable_card_keeps_offset_finite() {
        let mut layout = FakeLayout::new(500.0, 3);
        layout.card = None;
        let mut s: Scheduler<SliderTask> = Scheduler::new();
        let mut slider = SliderController::new();
        slider.render(&layout);
        slider.go_next(&layout, &mut s);
        assert_eq!(slider.view().offset, 0.0);
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn test_activate_renders_after_delay() {
        let layout = FakeLayout::new(1200.0, 5);
        let mut s = Scheduler::new();
        let mut slider = SliderController::new();
        slider.activate(&mut s);
        run(&mut slider, &mut s, &layout, ms(99));
        assert!(slider.view().prev_disabled && slider.view().next_disabled);
        run(&mut slider, &mut s, &layout, ms(100));
        assert!(!slider.view().next_disabled);
    }

    #[test]
    fn test_index_invariant_under_mixed_actions() {
        let widths = [1200.0, 900.0, 500.0, 1100.0, 700.0];
        for cards in 0..8usize {
            let mut layout = FakeLayout::new(1200.0, cards);
            let mut s = Scheduler::new();
            let mut slider = SliderController::new();
            slider.render(&layout);
            let mut t = 0u64;
            for step in 0..40usize {
                match step % 4 {
                    0 | 1 => {
                        slider.go_next(&layout, &mut s);
                    }
                    2 => {
                        layout.width = widths[step % widths.len()];
                        slider.on_viewport_resize(&mut s);
                    }
                    _ => {
                        slider.go_previous(&layout, &mut s);
                    }
                }
                t += 250;
                run(&mut slider, &mut s, &layout, ms(t));
                let max = cards.saturating_sub(slider.visible_count());
                assert!(slider.current_index() <= max, "cards={cards} step={step}");
            }
        }
    }

    #[test]
    fn test_tween_interpolates_and_settles() {
        let mut tween = OffsetTween::settled(0.0);
        tween.retarget(-300.0, ms(1000));
        assert!(tween.is_running(ms(1000)));
        assert_eq!(tween.value_at(ms(1000)), 0.0);
        let mid = tween.value_at(ms(1300));
        assert!(mid < 0.0 && mid > -300.0);
        assert_eq!(tween.value_at(ms(1600)), -300.0);
        assert!(!tween.is_running(ms(1600)));
    }
}
