//! Persisted preferences
//!
//! Only presentation choices are stored. The calculation history is never
//! written to disk.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Dark palette (the default) or light palette
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    /// Whether the history side panel is visible
    #[serde(default = "default_show_history")]
    pub show_history: bool,
    /// Maximum history entries kept in memory; unbounded when unset
    #[serde(default)]
    pub history_cap: Option<usize>,
}

fn default_dark_mode() -> bool {
    true
}

fn default_show_history() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            show_history: default_show_history(),
            history_cap: None,
        }
    }
}

/// Per-user config directory for an application.
pub fn config_dir(app_name: &str) -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", app_name).map(|p| p.config_dir().to_path_buf())
}

impl Preferences {
    /// `<config dir>/tally/preferences.json`
    pub fn default_path() -> Result<PathBuf> {
        config_dir("tally")
            .map(|dir| dir.join("preferences.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "preferences saved");
        Ok(())
    }
}
