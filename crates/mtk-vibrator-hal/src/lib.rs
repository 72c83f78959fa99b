//! Vibrator HAL service for MediaTek platforms
//!
//! Drives the kernel's LED-class vibrator driver over sysfs. A vibration is
//! three control node writes (arm, duration, activate); stopping is one.
//! Amplitude control and external control are not available on this
//! fixed-strength motor and report unsupported.
//!
//! # Example
//!
//! ```no_run
//! use mtk_vibrator_hal::{Vibrator, VibratorService};
//!
//! fn main() -> anyhow::Result<()> {
//!     let vibrator = VibratorService::new();
//!
//!     vibrator.on(40)?; // notification blip
//!     vibrator.off()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod service;

pub use config::{ConfigError, VibratorConfig};
pub use service::{Vibrator, VibratorService};

pub use mtk_hal_core::{HalError, Result};
