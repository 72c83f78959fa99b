//! Vibrator node configuration
//!
//! The kernel exposes the motor as a LED-class device with three control
//! nodes. Their location is board wiring rather than user preference, so the
//! defaults match the stock MediaTek device tree and a TOML override is only
//! needed on boards that move them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Locations of the vibrator control nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibratorConfig {
    /// Arms the driver for the next activation
    #[serde(default = "default_state_node")]
    pub state_node: PathBuf,
    /// Vibration length in milliseconds
    #[serde(default = "default_duration_node")]
    pub duration_node: PathBuf,
    /// Starts and stops the motor
    #[serde(default = "default_activate_node")]
    pub activate_node: PathBuf,
}

fn default_state_node() -> PathBuf {
    PathBuf::from("/sys/class/leds/vibrator/state")
}

fn default_duration_node() -> PathBuf {
    PathBuf::from("/sys/class/leds/vibrator/duration")
}

fn default_activate_node() -> PathBuf {
    PathBuf::from("/sys/class/leds/vibrator/activate")
}

impl Default for VibratorConfig {
    fn default() -> Self {
        Self {
            state_node: default_state_node(),
            duration_node: default_duration_node(),
            activate_node: default_activate_node(),
        }
    }
}

impl VibratorConfig {
    /// Load node locations from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
