//! Background terminal input
//!
//! Reading crossterm events blocks, while the page also has timers to run.
//! A reader thread forwards events over a channel so the UI loop can wait on
//! "next input or next timer, whichever comes first".
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use folio::event_pump::{EventPump, Poll};
//!
//! let pump = EventPump::spawn();
//! match pump.wait(Duration::from_millis(100)) {
//!     Poll::Event(event) => println!("got {:?}", event),
//!     Poll::Timeout => {}
//!     Poll::Closed => return,
//! }
//! ```

use std::thread;
use std::time::Duration;

use crossbeam::channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use crossterm::event::{self, Event};
use tracing::warn;

/// Outcome of waiting for input
#[derive(Debug)]
pub enum Poll {
    Event(Event),
    Timeout,
    /// The reader stopped; no more input will arrive
    Closed,
}

/// Receives terminal events from a background reader thread
pub struct EventPump {
    receiver: Receiver<Event>,
}

impl EventPump {
    /// Start the reader thread
    pub fn spawn() -> Self {
        let (sender, receiver) = unbounded();
        thread::spawn(move || Self::read_loop(sender));
        Self { receiver }
    }

    /// Build a pump fed by an existing channel
    pub fn from_channel(receiver: Receiver<Event>) -> Self {
        Self { receiver }
    }

    fn read_loop(sender: Sender<Event>) {
        loop {
            match event::read() {
                Ok(ev) => {
                    if sender.send(ev).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "terminal input failed");
                    return;
                }
            }
        }
    }

    /// Wait up to `timeout` for the next event
    pub fn wait(&self, timeout: Duration) -> Poll {
        match self.receiver.recv_timeout(timeout) {
            Ok(ev) => Poll::Event(ev),
            Err(RecvTimeoutError::Timeout) => Poll::Timeout,
            Err(RecvTimeoutError::Disconnected) => Poll::Closed,
        }
    }

    /// Next already-queued event, without waiting
    pub fn try_next(&self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }
}
