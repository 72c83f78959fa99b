//! Power service
//!
//! Implements the platform power interface on top of the vendor hint
//! engine. A launch boost is held as a vendor performance lock, one at a
//! time; interactive toggles map to the user-scenario restore/disable pair;
//! low power gates every later boost off. The per-thread hint session
//! surface has no vendor backing and reports unsupported.

use crate::hint::HintProvider;
use crate::types::{Boost, HintSession, Mode};
#[cfg(feature = "tap-to-wake")]
use mtk_hal_core::ControlNode;
use mtk_hal_core::{HalError, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Vendor hint id backing `Mode::LAUNCH`
const LAUNCH_HINT: i32 = 11;
/// How long a launch lock is held, in milliseconds
const LAUNCH_BOOST_MS: i32 = 30_000;
/// Minimum `Boost::INTERACTION` duration, in milliseconds
const INTERACTION_BOOST_MS: i32 = 80;
/// Vendor init path selector
const INIT_MODE: i32 = 1;

/// Platform power interface, version 2
pub trait Power: Send + Sync {
    fn set_mode(&self, mode: Mode, enabled: bool) -> Result<()>;
    fn is_mode_supported(&self, mode: Mode) -> Result<bool>;
    fn set_boost(&self, boost: Boost, duration_ms: i32) -> Result<()>;
    fn is_boost_supported(&self, boost: Boost) -> Result<bool>;
    fn create_hint_session(
        &self,
        tgid: i32,
        uid: i32,
        thread_ids: &[i32],
        duration_nanos: i64,
    ) -> Result<HintSession>;
    fn get_hint_session_preferred_rate(&self) -> Result<i64>;
}

/// Power service configuration
#[derive(Debug, Clone)]
pub struct PowerConfig {
    /// Touchpanel node toggled by `Mode::DOUBLE_TAP_TO_WAKE` when the
    /// `tap-to-wake` feature is compiled in
    pub tap_to_wake_node: PathBuf,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            tap_to_wake_node: PathBuf::from("/proc/touchpanel/double_tap_enable"),
        }
    }
}

#[derive(Debug, Default)]
struct PowerState {
    low_power: bool,
    /// Handle of the launch lock currently held; at most one
    perf_handle: Option<i32>,
}

/// Power service backed by a vendor hint engine
pub struct PowerService {
    hints: Arc<dyn HintProvider>,
    config: PowerConfig,
    state: Mutex<PowerState>,
}

impl PowerService {
    /// Create the service and bring up the vendor engine
    pub fn new(hints: Arc<dyn HintProvider>) -> Self {
        Self::with_config(hints, PowerConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(hints: Arc<dyn HintProvider>, config: PowerConfig) -> Self {
        hints.init(INIT_MODE);
        tracing::info!("Power service ready");

        Self {
            hints,
            config,
            state: Mutex::new(PowerState::default()),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &PowerConfig {
        &self.config
    }
}

impl Power for PowerService {
    fn set_mode(&self, mode: Mode, enabled: bool) -> Result<()> {
        tracing::debug!("setMode: {} to: {}", mode, enabled);

        match mode {
            #[cfg(feature = "tap-to-wake")]
            Mode::DOUBLE_TAP_TO_WAKE => {
                // A missing touchpanel node must not fail the mode request;
                // the node logs the failure
                let node = ControlNode::new(&self.config.tap_to_wake_node);
                let _ = node.write_bool(enabled);
            }
            Mode::LAUNCH => {
                let mut state = self.state.lock().unwrap();

                // At most one launch lock: drop the previous one before
                // anything else, even when low power stops the new acquire
                if let Some(handle) = state.perf_handle.take() {
                    self.hints.release_lock(handle);
                }

                if state.low_power {
                    return Ok(());
                }

                if enabled {
                    let handle = self.hints.acquire_lock(LAUNCH_HINT, LAUNCH_BOOST_MS, pid());
                    // The vendor answers 0 when no lock was taken
                    state.perf_handle = (handle != 0).then_some(handle);
                }
            }
            Mode::INTERACTIVE => {
                if enabled {
                    // Device back in the interactive state, restore all
                    // currently held hints
                    self.hints.restore_all();
                } else {
                    // Device entering the non-interactive state, disable
                    // all hints to save power
                    self.hints.disable_all();
                }
            }
            Mode::LOW_POWER => {
                self.state.lock().unwrap().low_power = enabled;
            }
            _ => {}
        }

        Ok(())
    }

    fn is_mode_supported(&self, mode: Mode) -> Result<bool> {
        tracing::trace!("isModeSupported: {}", mode);
        Ok(mode.is_declared())
    }

    fn set_boost(&self, boost: Boost, duration_ms: i32) -> Result<()> {
        if self.state.lock().unwrap().low_power {
            return Ok(());
        }

        let duration_ms = if boost == Boost::INTERACTION && duration_ms < 1 {
            INTERACTION_BOOST_MS
        } else {
            duration_ms
        };

        tracing::debug!("setBoost: {} duration: {}", boost, duration_ms);

        // Boost locks expire on their own; the handle is not tracked
        self.hints.acquire_lock(boost.0, duration_ms, pid());
        Ok(())
    }

    fn is_boost_supported(&self, boost: Boost) -> Result<bool> {
        tracing::trace!("isBoostSupported: {}", boost);
        Ok(boost.is_declared())
    }

    fn create_hint_session(
        &self,
        _tgid: i32,
        _uid: i32,
        _thread_ids: &[i32],
        _duration_nanos: i64,
    ) -> Result<HintSession> {
        Err(HalError::UnsupportedOperation)
    }

    fn get_hint_session_preferred_rate(&self) -> Result<i64> {
        Err(HalError::UnsupportedOperation)
    }
}

fn pid() -> i32 {
    nix::unistd::getpid().as_raw()
}
