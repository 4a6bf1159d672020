//! Reveal-on-scroll tracking.
//!
//! Sections and skill items animate in the first time enough of them enters
//! the viewport. Skill items are staggered by their position in the observed
//! list.

use std::time::Duration;

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
const STAGGER_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Section,
    SkillItem,
}

/// Vertical extent in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    pub top: f64,
    pub height: f64,
}

impl VerticalSpan {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Share of this span that lies inside `viewport`, in `[0, 1]`.
    pub fn visible_fraction(&self, viewport: &VerticalSpan) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let overlap = self.bottom().min(viewport.bottom()) - self.top.max(viewport.top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub kind: RevealKind,
    pub span: VerticalSpan,
    /// Transition delay; zero for sections.
    pub delay: Duration,
    /// Logical time the element revealed at.
    pub revealed_at: Option<Duration>,
}

impl RevealTarget {
    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Whether the element's entrance has started by `now`.
    pub fn is_shown_at(&self, now: Duration) -> bool {
        self.revealed_at
            .map(|at| now >= at + self.delay)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    targets: Vec<RevealTarget>,
}

impl RevealTracker {
    /// Observes elements in document order.
    pub fn observe(elements: impl IntoIterator<Item = (RevealKind, VerticalSpan)>) -> Self {
        let targets = elements
            .into_iter()
            .enumerate()
            .map(|(index, (kind, span))| RevealTarget {
                kind,
                span,
                delay: match kind {
                    RevealKind::SkillItem => STAGGER_STEP * index as u32,
                    RevealKind::Section => Duration::ZERO,
                },
                revealed_at: None,
            })
            .collect();
        Self { targets }
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    /// Moves elements to new positions, keeping their reveal state.
    pub fn relayout(&mut self, spans: impl IntoIterator<Item = VerticalSpan>) {
        for (target, span) in self.targets.iter_mut().zip(spans) {
            target.span = span;
        }
    }

    /// Reveals every element crossing the threshold; returns newly revealed indices.
    pub fn update(&mut self, viewport: VerticalSpan, now: Duration) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (index, target) in self.targets.iter_mut().enumerate() {
            if target.is_revealed() {
                continue;
            }
            if target.span.visible_fraction(&viewport) >= REVEAL_THRESHOLD {
                target.revealed_at = Some(now);
                revealed.push(index);
            }
        }
        revealed
    }
}
