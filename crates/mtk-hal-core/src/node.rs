//! Control node writes
//!
//! Kernel control nodes under sysfs and procfs take one short ASCII write
//! per command. Every write here is a single open-write-close with no
//! caching and no retry; the kernel applies the value as the write lands.

use crate::{HalError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A single writable kernel control node
#[derive(Debug, Clone)]
pub struct ControlNode {
    path: PathBuf,
}

impl ControlNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Node path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a decimal value, newline terminated
    pub fn write(&self, value: i32) -> Result<()> {
        self.write_bytes(value, format!("{}\n", value).as_bytes())
    }

    /// Write "1" or "0" with no trailing newline
    pub fn write_bool(&self, enabled: bool) -> Result<()> {
        self.write_bytes(i32::from(enabled), if enabled { b"1" } else { b"0" })
    }

    fn write_bytes(&self, value: i32, contents: &[u8]) -> Result<()> {
        fs::write(&self.path, contents).map_err(|source| {
            tracing::error!("Failed to write {} to {}", value, self.path.display());
            HalError::Node {
                path: self.path.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_decimal_newline() {
        let dir = TempDir::new().unwrap();
        let node = ControlNode::new(dir.path().join("duration"));

        node.write(500).unwrap();
        assert_eq!(fs::read_to_string(node.path()).unwrap(), "500\n");
    }

    #[test]
    fn test_write_truncates_previous_value() {
        let dir = TempDir::new().unwrap();
        let node = ControlNode::new(dir.path().join("state"));

        node.write(30000).unwrap();
        node.write(0).unwrap();
        assert_eq!(fs::read_to_string(node.path()).unwrap(), "0\n");
    }

    #[test]
    fn test_write_negative_value() {
        let dir = TempDir::new().unwrap();
        let node = ControlNode::new(dir.path().join("duration"));

        node.write(-3).unwrap();
        assert_eq!(fs::read_to_string(node.path()).unwrap(), "-3\n");
    }

    #[test]
    fn test_write_bool_has_no_newline() {
        let dir = TempDir::new().unwrap();
        let node = ControlNode::new(dir.path().join("double_tap_enable"));

        node.write_bool(true).unwrap();
        assert_eq!(fs::read_to_string(node.path()).unwrap(), "1");

        node.write_bool(false).unwrap();
        assert_eq!(fs::read_to_string(node.path()).unwrap(), "0");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let node = ControlNode::new(dir.path().join("missing").join("state"));

        let err = node.write(1).unwrap_err();
        match err {
            HalError::Node { path, .. } => assert_eq!(path, node.path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
