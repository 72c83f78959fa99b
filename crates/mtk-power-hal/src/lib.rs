//! Power HAL service for MediaTek platforms
//!
//! Bridges the platform power interface to the MediaTek vendor hint engine,
//! `libpowerhal.so`. Mode toggles and boosts become vendor performance
//! locks; the per-thread hint session surface has no vendor backing and is
//! reported unsupported so the framework falls back to its own scheduling.
//!
//! # Example
//!
//! ```no_run
//! use mtk_power_hal::types::{Boost, Mode};
//! use mtk_power_hal::{LibPowerHal, Power, PowerService};
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Aborts the process when libpowerhal.so is absent or incomplete
//!     let service = PowerService::new(Arc::new(LibPowerHal::load()));
//!
//!     service.set_mode(Mode::LAUNCH, true)?;
//!     service.set_boost(Boost::INTERACTION, 0)?;
//!     Ok(())
//! }
//! ```

pub mod hint;
pub mod mock;
pub mod service;
pub mod types;

pub use hint::{HintLibError, HintProvider, LibPowerHal, POWERHAL_LIB};
pub use service::{Power, PowerConfig, PowerService};
pub use types::{Boost, HintSession, Mode};

pub use mtk_hal_core::{HalError, Result};
