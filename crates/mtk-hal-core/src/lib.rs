//! Core plumbing for the MediaTek HAL services
//!
//! Shared between the power and vibrator services: the status model of the
//! platform HAL contract and the control node writer both adapters sit on.
//! The services themselves live in `mtk-power-hal` and `mtk-vibrator-hal`.

pub mod node;
pub mod status;

pub use node::ControlNode;
pub use status::HalError;

/// HAL Result type
pub type Result<T> = std::result::Result<T, HalError>;
