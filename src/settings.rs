//! Analysis settings persistence.
//!
//! Course geometry and output options are read from a JSON file so the lap
//! sector analysis can be pointed at other circuits without a rebuild.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analysis::format::FAILED_PLACEHOLDER;
use crate::analysis::sectors::CourseConfig;
use crate::error::{Result, StatsError};

/// Settings that persist across runs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Course used for sector timing
    #[serde(default)]
    pub course: CourseConfig,
    /// Text written in place of an interval that could not be measured
    #[serde(default = "default_placeholder")]
    pub failed_placeholder: String,
}

fn default_version() -> u32 {
    1
}

fn default_placeholder() -> String {
    FAILED_PLACEHOLDER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            course: CourseConfig::default(),
            failed_placeholder: default_placeholder(),
        }
    }
}

impl Settings {
    /// Get the config directory path for forzastats
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("forzastats"))
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from the default location.
    ///
    /// A missing or unreadable file yields defaults.
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&content)?;
        tracing::info!(
            "Loaded settings from {:?} (course: {})",
            path,
            settings.course.name
        );
        Ok(settings)
    }

    /// Parse settings from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| StatsError::Settings(e.to_string()))
    }

    /// Save settings to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StatsError::Settings(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }
}
