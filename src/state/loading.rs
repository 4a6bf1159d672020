//! Loading overlay lifecycle.

use std::time::Duration;

use crate::scheduler::Scheduler;

/// Fade-out time between hiding the overlay and removing it.
pub const FADE_OUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Visible,
    Hiding,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingTask {
    Remove,
}

#[derive(Debug, Clone)]
pub struct LoadingOverlay {
    phase: LoadingPhase,
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self {
            phase: LoadingPhase::Visible,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn is_shown(&self) -> bool {
        self.phase != LoadingPhase::Removed
    }

    /// Starts the fade once the page is ready. Repeated calls are ignored.
    pub fn on_load<T: From<LoadingTask>>(&mut self, scheduler: &mut Scheduler<T>) {
        if self.phase == LoadingPhase::Visible {
            self.phase = LoadingPhase::Hiding;
            scheduler.schedule(FADE_OUT, LoadingTask::Remove);
        }
    }

    pub fn handle_task(&mut self, task: LoadingTask) {
        match task {
            LoadingTask::Remove => self.phase = LoadingPhase::Removed,
        }
    }
}
