//! Configuration Management

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pixels per terminal column when deriving the viewport width
    pub cell_width_px: f64,
    /// Pixels per terminal row, used for swipe distances
    pub cell_height_px: f64,
    /// Horizontal margin on each side of a project card, CSS-style ("8px")
    pub card_margin: String,
    /// Where the theme preference is stored; in-memory only when unset
    pub preferences_path: Option<PathBuf>,
    /// Log file; logging is disabled when unset
    pub log_path: Option<PathBuf>,
    /// Page content; built-in content when unset
    pub content_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            card_margin: "8px".into(),
            preferences_path: Some(PathBuf::from("folio-prefs.json")),
            log_path: Some(PathBuf::from("folio.log")),
            content_path: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| FolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&raw).map_err(|source| FolioError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Load `folio.json` from the working directory, or defaults if absent
    pub fn load_default() -> Result<Self> {
        let path = Path::new("folio.json");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cell_width_px.is_finite() && self.cell_width_px > 0.0) {
            self.cell_width_px = defaults.cell_width_px;
        }
        if !(self.cell_height_px.is_finite() && self.cell_height_px > 0.0) {
            self.cell_height_px = defaults.cell_height_px;
        }
        self
    }
}
