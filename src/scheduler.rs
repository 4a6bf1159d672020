//! Delayed task scheduling for UI timers
//!
//! Every timer in the page (slider lock release, resize debounce, section
//! scroll lock, typing cadence, loading fade) goes through a [`Scheduler`].
//! The scheduler keeps a logical clock instead of reading wall time, so the
//! event loop feeds it real elapsed time while tests step it by hand.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use folio::scheduler::Scheduler;
//!
//! let mut scheduler: Scheduler<&str> = Scheduler::new();
//! let handle = scheduler.schedule(Duration::from_millis(100), "debounce");
//! scheduler.cancel(handle);
//! scheduler.schedule(Duration::from_millis(100), "debounce");
//!
//! // Drain everything due up to the current time
//! let mut fired = Vec::new();
//! while let Some(task) = scheduler.next_due(Duration::from_millis(150)) {
//!     fired.push(task);
//! }
//! assert_eq!(fired, vec!["debounce"]);
//! ```

use std::time::Duration;

/// Identifies a scheduled task so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    id: u64,
    due: Duration,
    task: T,
}

/// Cancellable delayed tasks on a monotonic logical clock
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with the clock at zero
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current logical time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` after the current logical time
    pub fn schedule(&mut self, delay: Duration, task: impl Into<T>) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            task: task.into(),
        });
        TaskHandle(id)
    }

    /// Cancel a pending task
    ///
    /// Returns `false` when the task already fired or was cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != handle.0);
        self.entries.len() != before
    }

    /// Number of tasks waiting to fire
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Due time of the earliest pending task
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Pop the earliest task due at or before `until`
    ///
    /// The clock moves to the popped task's due time, so anything its handler
    /// schedules is timed from that moment. When nothing is due the clock
    /// moves to `until` and `None` is returned. Ties fire in scheduling order.
    pub fn next_due(&mut self, until: Duration) -> Option<T> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i);

        match position {
            Some(i) => {
                let entry = self.entries.swap_remove(i);
                self.now = self.now.max(entry.due);
                Some(entry.task)
            }
            None => {
                self.now = self.now.max(until);
                None
            }
        }
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
