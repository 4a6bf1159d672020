// Library for testable modules
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod event_pump;
pub mod key_handler;
pub mod pages;
pub mod prefs;
pub mod render_context;
pub mod scheduler;
pub mod screen;
pub mod state;
pub mod ui_utils;
pub mod viewport;

// Re-export main types used in tests and benches
pub use data::{ContactLink, Portfolio, Project, Skill};
pub use scheduler::{Scheduler, TaskHandle};
pub use state::{LayoutProbe, SliderController, SliderTask};
pub use viewport::TerminalViewport;
