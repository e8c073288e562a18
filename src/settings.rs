//! Game settings and preferences
//!
//! Read from LocalStorage on the web and from a JSON file natively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::{Tuning, TuningError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error("invalid control setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
}

/// Touch and keyboard thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Minimum vertical travel (px) for a touch to count as a swipe
    pub swipe_threshold: f32,
    /// How long a swipe-down slide is held (ms)
    pub touch_slide_ms: f64,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: 30.0,
            touch_slide_ms: 600.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay balance
    pub tuning: Tuning,
    /// Input thresholds
    pub controls: ControlSettings,
    /// Show FPS counter in the HUD
    pub show_fps: bool,
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "endless_runner_settings";

    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.tuning.validate()?;
        if self.controls.swipe_threshold <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "swipe_threshold",
                reason: "must be positive",
            });
        }
        if self.controls.touch_slide_ms < 0.0 {
            return Err(SettingsError::Invalid {
                field: "touch_slide_ms",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}
