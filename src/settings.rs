//! Runtime settings
//!
//! Read from an optional JSON file; every field has a default so a partial
//! file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::{KeyParseError, PressedKeys};
use crate::sim::{WaveConfig, WaveTableError, default_waves, validate_waves};

/// Errors loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid wave table: {0}")]
    Waves(#[from] WaveTableError),
    #[error("invalid held keys: {0}")]
    Keys(#[from] KeyParseError),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; a time-based seed is picked when absent
    pub seed: Option<u64>,
    /// Let the built-in bot play
    pub autopilot: bool,
    /// Pace ticks at the real tick rate instead of running flat out
    pub realtime: bool,
    /// Stop after this many ticks even if the run is still going
    pub max_ticks: u64,
    /// Press return on the first tick
    pub auto_start: bool,
    /// Keys held for the whole run when the autopilot is off, e.g. "right arrow, space"
    pub hold_keys: String,
    /// Replacement wave table
    pub waves: Option<Vec<WaveConfig>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: true,
            realtime: false,
            // Four 30s waves plus pauses fit comfortably
            max_ticks: 10_000,
            auto_start: true,
            hold_keys: String::new(),
            waves: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Check the parts serde cannot
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(waves) = &self.waves {
            validate_waves(waves)?;
        }
        self.held_keys()?;
        Ok(())
    }

    /// Wave table to play
    pub fn wave_table(&self) -> Vec<WaveConfig> {
        self.waves.clone().unwrap_or_else(default_waves)
    }

    /// Keys held for the run
    pub fn held_keys(&self) -> Result<PressedKeys, KeyParseError> {
        PressedKeys::parse_list(&self.hold_keys)
    }

    /// Configured seed, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}
