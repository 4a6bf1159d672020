//! Theme flag and palette.

use ratatui::style::Color;
use tracing::{info, warn};

use crate::prefs::PreferenceStore;

/// Preference key the theme is saved under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☾",
            Theme::Light => "☀",
        }
    }
}

/// Colors used by every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub disabled: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(17, 24, 39),
        text: Color::Rgb(229, 231, 235),
        muted: Color::Rgb(156, 163, 175),
        accent: Color::Rgb(96, 165, 250),
        disabled: Color::Rgb(75, 85, 99),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(249, 250, 251),
        text: Color::Rgb(17, 24, 39),
        muted: Color::Rgb(75, 85, 99),
        accent: Color::Rgb(37, 99, 235),
        disabled: Color::Rgb(209, 213, 219),
    };
}

/// The page theme. Unset until the visitor picks one or a saved value exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    current: Option<Theme>,
}

impl ThemeState {
    /// Restores the saved theme, ignoring unknown values.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let current = store.get(THEME_KEY).and_then(|v| Theme::parse(&v));
        Self { current }
    }

    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    /// Theme actually painted; an unset theme renders light.
    pub fn effective(&self) -> Theme {
        self.current.unwrap_or(Theme::Light)
    }

    pub fn palette(&self) -> Palette {
        match self.effective() {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
        }
    }

    pub fn icon(&self) -> &'static str {
        self.effective().icon()
    }

    /// Flips dark to light and anything else to dark, then saves the choice.
    ///
    /// A failed save is logged; the new theme still applies.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        let next = match self.current {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        };
        self.current = Some(next);
        match store.set(THEME_KEY, next.as_str()) {
            Ok(()) => info!(theme = next.as_str(), "theme changed"),
            Err(err) => warn!(error = %err, "theme preference not saved"),
        }
        next
    }
}
