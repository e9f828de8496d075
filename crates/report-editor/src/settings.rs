//! Editor settings - user preferences read from a TOML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use report_export::ExportFormat;

use crate::editor::ReentryPolicy;
use crate::notify::DEFAULT_TIMEOUT;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Editor settings.
///
/// Every table and key is optional; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub notifications: NotificationSettings,
    pub editing: EditingSettings,
    pub export: ExportSettings,
}

impl EditorSettings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        };
        Self::from_toml_str(&content).unwrap_or_else(|error| {
            tracing::warn!(path = %path.display(), %error, "Ignoring unreadable settings");
            Self::default()
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Default settings file location.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "CryptoAdoptionReport", "report-editor")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notifications.timeout_ms)
    }

    /// Filename to offer when saving an export.
    pub fn export_filename(&self, format: ExportFormat) -> &str {
        match format {
            ExportFormat::Json => &self.export.json_filename,
            ExportFormat::Csv => &self.export.csv_filename,
        }
    }
}

// =============================================================================
// TABLES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long a notification stays visible, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            timeout_ms: u64::try_from(DEFAULT_TIMEOUT.as_millis()).unwrap_or(3000),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingSettings {
    pub reentry_policy: ReentryPolicy,
    /// Open the report with edit mode already on.
    pub start_in_edit_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub json_filename: String,
    pub csv_filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            json_filename: ExportFormat::Json.default_filename().to_string(),
            csv_filename: ExportFormat::Csv.default_filename().to_string(),
        }
    }
}
