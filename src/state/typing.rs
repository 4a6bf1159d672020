//! Hero typing animation.
//!
//! Types the greeting out one character at a time, pauses, deletes it a
//! little faster, pauses again and starts over.

use std::time::Duration;

use crate::scheduler::Scheduler;

pub const START_DELAY: Duration = Duration::from_millis(1000);
pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const DELETE_DELAY: Duration = Duration::from_millis(100);
/// Pause with the full text shown before deleting.
pub const HOLD_FULL: Duration = Duration::from_millis(2000);
/// Pause with the text cleared before typing again.
pub const HOLD_EMPTY: Duration = Duration::from_millis(1000);
const CARET_BLINK: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingTask {
    Step,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: Vec<char>,
    shown: usize,
    char_index: usize,
    is_deleting: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            shown: 0,
            char_index: 0,
            is_deleting: false,
        }
    }

    /// Schedules the first step once the page has loaded.
    pub fn start<T: From<TypingTask>>(&self, scheduler: &mut Scheduler<T>) {
        scheduler.schedule(START_DELAY, TypingTask::Step);
    }

    /// Text currently on screen.
    pub fn visible_text(&self) -> String {
        self.text[..self.shown].iter().collect()
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    /// Shows the current prefix, advances one character and returns the
    /// delay until the next step.
    pub fn step(&mut self) -> Duration {
        self.shown = self.char_index.min(self.text.len());

        if !self.is_deleting && self.char_index < self.text.len() {
            self.char_index += 1;
            TYPE_DELAY
        } else if self.is_deleting && self.char_index > 0 {
            self.char_index -= 1;
            DELETE_DELAY
        } else {
            self.is_deleting = !self.is_deleting;
            if self.is_deleting {
                HOLD_FULL
            } else {
                HOLD_EMPTY
            }
        }
    }

    pub fn handle_task<T: From<TypingTask>>(&mut self, task: TypingTask, scheduler: &mut Scheduler<T>) {
        match task {
            TypingTask::Step => {
                let delay = self.step();
                scheduler.schedule(delay, TypingTask::Step);
            }
        }
    }
}

/// Whether the blinking caret is lit at `now`.
pub fn caret_visible(now: Duration) -> bool {
    (now.as_millis() / CARET_BLINK.as_millis()) % 2 == 0
}
