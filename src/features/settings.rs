//! Application settings persistence
//!
//! Handles saving and loading list geometry and display preferences.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::coordinator::DEFAULT_LOOKAHEAD_ROWS;
use super::load_tracker::Universe;
use super::session::ListConfig;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Rating list geometry and loading
    #[serde(default)]
    pub list: ListSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Rating list settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    /// Number of rating items in the list
    pub item_count: usize,
    /// Items rendered side by side in one row
    pub items_per_row: usize,
    /// Row height in pixels
    pub row_height: f32,
    /// Rows loaded ahead of the visible window
    pub lookahead_rows: usize,
    /// Simulated load latency in milliseconds
    pub load_latency_ms: u64,
}

impl ListSettings {
    /// Simulated latency as a `Duration`
    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }

    /// List geometry for a session, with out-of-range values replaced
    pub fn to_config(&self, viewport_height: f32) -> ListConfig {
        let row_height = if self.row_height.is_finite() && self.row_height > 0.0 {
            self.row_height
        } else {
            Self::default().row_height
        };
        ListConfig {
            universe: Universe::new(self.item_count, self.items_per_row),
            row_height,
            viewport_height,
            lookahead_rows: self.lookahead_rows,
        }
    }
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Interface language ("en" or "zh")
    pub language: String,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            item_count: 100,
            items_per_row: 2,
            row_height: 150.0,
            lookahead_rows: DEFAULT_LOOKAHEAD_ROWS,
            load_latency_ms: 500,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stargrid", "Stargrid")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        match Self::file_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                tracing::warn!("No config directory; using default settings");
                Self::default()
            }
        }
    }

    /// Defaults when `path` is missing (first run) or unusable; the latter is logged
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) if e.is_not_found() => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io {
                kind: io::ErrorKind::NotFound,
                message: "Could not determine config directory".to_string(),
            })
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io { kind: io::ErrorKind, message: String },
    Parse(String),
}

impl SettingsError {
    /// The settings file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::Io { kind, .. } if *kind == io::ErrorKind::NotFound)
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io { message, .. } => write!(f, "IO error: {}", message),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.list.item_count = 40;
        settings.display.dark_mode = false;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.list.item_count, 40);
        assert!(!loaded.display.dark_mode);
        assert_eq!(loaded.list.items_per_row, 2);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "list": { "lookahead_rows": 8 } }"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.list.lookahead_rows, 8);
        assert_eq!(loaded.list.item_count, 100);
        assert_eq!(loaded.display.language, "en");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(Settings::load_or_default(&path).list.item_count, 100);
    }

    #[test]
    fn unreadable_path_is_reported_not_skipped() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be
        let path = dir.path().join("settings.json");
        std::fs::create_dir(&path).unwrap();

        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(!err.is_not_found());
        assert_eq!(Settings::load_or_default(&path).list.row_height, 150.0);
    }

    #[test]
    fn config_sanitizes_geometry() {
        let list = ListSettings {
            item_count: 0,
            items_per_row: 0,
            row_height: -3.0,
            ..ListSettings::default()
        };
        let config = list.to_config(500.0);
        assert_eq!(config.universe.item_count(), 1);
        assert_eq!(config.universe.items_per_row(), 1);
        assert_eq!(config.row_height, 150.0);
    }

    #[test]
    fn default_config_matches_demo_universe() {
        let config = ListSettings::default().to_config(600.0);
        assert_eq!(config.universe.row_count(), 50);
        assert_eq!(config.lookahead_rows, 5);
        assert_eq!(ListSettings::default().load_latency(), Duration::from_millis(500));
    }
}
