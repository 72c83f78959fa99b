//! Mock hint provider for testing without the vendor blob
//!
//! `libpowerhal.so` only exists on MediaTek devices. `MockHints` records
//! every call made through [`HintProvider`](crate::hint::HintProvider) so
//! tests can assert on the exact sequence the service produced.
//!
//! # Usage
//!
//! ```
//! use mtk_power_hal::PowerService;
//! use mtk_power_hal::mock::{HintCall, MockHints};
//! use std::sync::Arc;
//!
//! let hints = Arc::new(MockHints::new());
//! let _service = PowerService::new(hints.clone());
//!
//! assert_eq!(hints.calls(), vec![HintCall::Init { mode: 1 }]);
//! ```

use crate::hint::HintProvider;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

/// One recorded call into the vendor seam
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintCall {
    Init { mode: i32 },
    Acquire { hint: i32, duration_ms: i32, pid: i32 },
    Release { handle: i32 },
    DisableAll,
    RestoreAll,
}

/// Recording stand-in for the vendor hint engine
pub struct MockHints {
    calls: Mutex<Vec<HintCall>>,
    // Handles start at 1; 0 is the vendor's "no lock taken" answer
    next_handle: AtomicI32,
}

impl MockHints {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_handle: AtomicI32::new(1),
        }
    }

    /// Snapshot of every call recorded so far, in order
    pub fn calls(&self) -> Vec<HintCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drop the recorded history, keeping the handle sequence
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: HintCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockHints {
    fn default() -> Self {
        Self::new()
    }
}

impl HintProvider for MockHints {
    fn init(&self, mode: i32) {
        self.record(HintCall::Init { mode });
    }

    fn acquire_lock(&self, hint: i32, duration_ms: i32, pid: i32) -> i32 {
        self.record(HintCall::Acquire { hint, duration_ms, pid });
        self.next_handle.fetch_add(1, Ordering::Relaxed)
    }

    fn release_lock(&self, handle: i32) {
        self.record(HintCall::Release { handle });
    }

    fn disable_all(&self) {
        self.record(HintCall::DisableAll);
    }

    fn restore_all(&self) {
        self.record(HintCall::RestoreAll);
    }
}
