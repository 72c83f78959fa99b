//! Service status model
//!
//! The HAL contract distinguishes two per-call failures: an operation this
//! implementation does not provide, and a control node that could not be
//! written. Fatal startup failures never become error values; they abort the
//! process before the service is registered.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HalError {
    #[error("Operation not supported")]
    UnsupportedOperation,

    #[error("Failed to write control node {}: {source}", .path.display())]
    Node {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HalError {
    /// Whether this is the unsupported-operation signal rather than a
    /// service-specific failure
    pub fn is_unsupported(&self) -> bool {
        matches!(self, HalError::UnsupportedOperation)
    }
}
