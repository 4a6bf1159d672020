//! Interaction state for the portfolio page.
//!
//! Each behaviour on the page owns its state in a struct of its own, built
//! explicitly by the `App` and driven by input events and scheduler tasks.
//! None of them touch the terminal, so each is unit tested on its own.
//!
//! # Architecture
//!
//! ```text
//! App
//! ├── SliderController   - Project card pagination
//! ├── SectionNavigator   - One-section-per-gesture scrolling, nav links, menu
//! ├── Typewriter         - Hero greeting animation
//! ├── CursorFollower     - Pointer follower and hover flag
//! ├── ThemeState         - Dark/light flag persisted in preferences
//! ├── RevealTracker      - Reveal-on-scroll with staggered skill items
//! └── LoadingOverlay     - Spinner shown until the page is ready
//! ```

mod cursor;
mod loading;
mod reveal;
mod sections;
pub mod slider;
mod theme;
mod typing;

pub use cursor::CursorFollower;
pub use loading::{LoadingOverlay, LoadingPhase, LoadingTask};
pub use reveal::{RevealKind, RevealTarget, RevealTracker, VerticalSpan};
pub use sections::{
    navbar_elevated, ScrollKey, Section, SectionNavigator, SectionSpan, SectionTask,
    MOBILE_MENU_MAX_WIDTH,
};
pub use slider::{CardBox, LayoutProbe, OffsetTween, SliderController, SliderTask, SliderView};
pub use theme::{Palette, Theme, ThemeState, THEME_KEY};
pub use typing::{caret_visible, Typewriter, TypingTask};
