//! Vibrator service
//!
//! Drives the LED-class vibrator driver through its three sysfs nodes. One
//! vibration is three writes in a fixed order: arm the state node, set the
//! duration, pull activate. Stopping is a single write of 0 to activate.
//! The service keeps no state; every request stands alone.

use crate::config::VibratorConfig;
use mtk_hal_core::{ControlNode, HalError, Result};

/// Platform vibrator interface
pub trait Vibrator: Send + Sync {
    /// Vibrate for `timeout_ms`; durations below one millisecond turn the
    /// motor off instead
    fn on(&self, timeout_ms: i32) -> Result<()>;

    /// Stop the motor
    fn off(&self) -> Result<()>;

    /// Optional capability bits; this driver advertises none
    fn get_capabilities(&self) -> Result<i32>;

    /// Amplitude control, unsupported on a fixed-strength motor
    fn set_amplitude(&self, amplitude: f32) -> Result<()>;

    /// External control, unsupported by this driver
    fn set_external_control(&self, enabled: bool) -> Result<()>;
}

/// Vibrator service over LED-class sysfs nodes
pub struct VibratorService {
    state_node: ControlNode,
    duration_node: ControlNode,
    activate_node: ControlNode,
}

impl VibratorService {
    /// Create with the stock node locations
    pub fn new() -> Self {
        Self::with_config(VibratorConfig::default())
    }

    /// Create with custom node locations
    pub fn with_config(config: VibratorConfig) -> Self {
        Self {
            state_node: ControlNode::new(config.state_node),
            duration_node: ControlNode::new(config.duration_node),
            activate_node: ControlNode::new(config.activate_node),
        }
    }

    /// Run one vibration: arm, set the duration, activate
    ///
    /// The first failing write stops the sequence; earlier writes stay in
    /// place.
    pub fn activate(&self, timeout_ms: i32) -> Result<()> {
        tracing::debug!("activate: {} ms", timeout_ms);

        if timeout_ms < 1 {
            return self.deactivate();
        }

        self.state_node.write(1)?;
        self.duration_node.write(timeout_ms)?;
        self.activate_node.write(1)?;

        Ok(())
    }

    /// Stop the motor; state and duration keep their last values
    pub fn deactivate(&self) -> Result<()> {
        tracing::debug!("deactivate");
        self.activate_node.write(0)
    }
}

impl Default for VibratorService {
    fn default() -> Self {
        Self::new()
    }
}

impl Vibrator for VibratorService {
    fn on(&self, timeout_ms: i32) -> Result<()> {
        self.activate(timeout_ms)
    }

    fn off(&self) -> Result<()> {
        self.deactivate()
    }

    fn get_capabilities(&self) -> Result<i32> {
        tracing::trace!("getCapabilities");
        Ok(0)
    }

    fn set_amplitude(&self, _amplitude: f32) -> Result<()> {
        Err(HalError::UnsupportedOperation)
    }

    fn set_external_control(&self, _enabled: bool) -> Result<()> {
        Err(HalError::UnsupportedOperation)
    }
}
