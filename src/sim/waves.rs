//! Wave table
//!
//! Each wave is a timed difficulty stage. The table is ordered; the index is
//! the wave number.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Difficulty settings for a single wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Seconds between meteor spawns
    pub spawn_interval: f64,
    /// Slowest meteor fall speed (pixels/tick, inclusive)
    pub min_speed: u32,
    /// Fastest meteor fall speed (pixels/tick, exclusive)
    pub max_speed: u32,
    /// Wave length in seconds
    pub duration: f64,
    /// Heart pickups planned for this wave
    pub max_collectables: u32,
}

impl WaveConfig {
    /// Seconds between collectable spawns for this wave.
    ///
    /// A single collectable drops halfway through. With more than one, they
    /// drop every `(duration - 5) / max_collectables` seconds for as long as the
    /// wave runs, which is not a hard cap on the count.
    pub fn collectable_interval(&self) -> Option<f64> {
        match self.max_collectables {
            0 => None,
            1 => Some(self.duration / 2.0),
            n => Some((self.duration - 5.0) / n as f64),
        }
    }
}

/// The stock four-wave campaign
pub fn default_waves() -> Vec<WaveConfig> {
    vec![
        WaveConfig {
            spawn_interval: 0.425,
            min_speed: 4,
            max_speed: 7,
            duration: 30.0,
            max_collectables: 1,
        },
        WaveConfig {
            spawn_interval: 0.25,
            min_speed: 7,
            max_speed: 12,
            duration: 30.0,
            max_collectables: 2,
        },
        WaveConfig {
            spawn_interval: 0.175,
            min_speed: 10,
            max_speed: 15,
            duration: 30.0,
            max_collectables: 5,
        },
        WaveConfig {
            spawn_interval: 0.25,
            min_speed: 15,
            max_speed: 20,
            duration: 30.0,
            max_collectables: 5,
        },
    ]
}

/// Problems found in a wave table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveTableError {
    #[error("wave table is empty")]
    Empty,
    #[error("wave {wave}: min_speed {min} must be below max_speed {max}")]
    SpeedRange { wave: usize, min: u32, max: u32 },
    #[error("wave {wave}: duration must be positive (got {duration})")]
    Duration { wave: usize, duration: f64 },
    #[error("wave {wave}: spawn_interval must be positive (got {interval})")]
    SpawnInterval { wave: usize, interval: f64 },
    #[error("wave {wave}: multi-collectable waves must last longer than 5 seconds")]
    CollectableWindow { wave: usize },
}

/// Check every wave against the table invariants
pub fn validate_waves(waves: &[WaveConfig]) -> Result<(), WaveTableError> {
    if waves.is_empty() {
        return Err(WaveTableError::Empty);
    }
    for (wave, cfg) in waves.iter().enumerate() {
        if cfg.min_speed >= cfg.max_speed {
            return Err(WaveTableError::SpeedRange {
                wave,
                min: cfg.min_speed,
                max: cfg.max_speed,
            });
        }
        if !(cfg.duration > 0.0) {
            return Err(WaveTableError::Duration {
                wave,
                duration: cfg.duration,
            });
        }
        if !(cfg.spawn_interval > 0.0) {
            return Err(WaveTableError::SpawnInterval {
                wave,
                interval: cfg.spawn_interval,
            });
        }
        if cfg.max_collectables > 1 && cfg.duration <= 5.0 {
            return Err(WaveTableError::CollectableWindow { wave });
        }
    }
    Ok(())
}
