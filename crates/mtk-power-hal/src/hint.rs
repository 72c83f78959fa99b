//! Vendor hint library
//!
//! The MediaTek performance hint engine ships as a prebuilt vendor library,
//! `libpowerhal.so`, resolved at service startup. Five entry points drive
//! it: one-time init, performance lock acquire and release, and the
//! user-scenario disable/restore pair. A library or symbol that fails to
//! resolve aborts the process: serving power requests on a partially
//! resolved vendor backend is not allowed.

use libloading::Library;
use thiserror::Error;

/// Vendor library name, resolved through the platform linker search path
pub const POWERHAL_LIB: &str = "libpowerhal.so";

const INIT_SYMBOL: &str = "libpowerhal_Init";
const CUS_LOCK_HINT_SYMBOL: &str = "libpowerhal_CusLockHint";
const LOCK_REL_SYMBOL: &str = "libpowerhal_LockRel";
const USER_SCN_DISABLE_ALL_SYMBOL: &str = "libpowerhal_UserScnDisableAll";
const USER_SCN_RESTORE_ALL_SYMBOL: &str = "libpowerhal_UserScnRestoreAll";

// C prototypes of the vendor entry points
type InitFn = unsafe extern "C" fn(libc::c_int);
type CusLockHintFn = unsafe extern "C" fn(i32, i32, libc::pid_t) -> libc::c_int;
type LockRelFn = unsafe extern "C" fn(libc::c_int);
type UserScnFn = unsafe extern "C" fn();

// Raw symbols outlive the borrow of the Library they came from; the handle
// is stored next to them and dropped last.
type RawSymbol<T> = libloading::os::unix::Symbol<T>;

#[derive(Debug, Error)]
pub enum HintLibError {
    #[error("Could not load {name}: {source}")]
    Library {
        name: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("Could not locate symbol {name}: {source}")]
    Symbol {
        name: &'static str,
        #[source]
        source: libloading::Error,
    },
}

/// Capability surface of the vendor hint engine
///
/// `PowerService` drives the vendor through this trait; tests substitute the
/// recording implementation in [`crate::mock`].
pub trait HintProvider: Send + Sync {
    /// One-time engine bring-up; `mode` selects the vendor init path
    fn init(&self, mode: i32);

    /// Acquire a performance lock for `duration_ms` on behalf of `pid`;
    /// returns the lock handle, 0 when no lock was taken
    fn acquire_lock(&self, hint: i32, duration_ms: i32, pid: i32) -> i32;

    /// Release a lock handle returned by `acquire_lock`
    fn release_lock(&self, handle: i32);

    /// Disable all user scenarios while the device is not interactive
    fn disable_all(&self);

    /// Restore all user scenarios on return to the interactive state
    fn restore_all(&self);
}

/// `HintProvider` backed by the real `libpowerhal.so`
#[derive(Debug)]
pub struct LibPowerHal {
    init: RawSymbol<InitFn>,
    acquire: RawSymbol<CusLockHintFn>,
    release: RawSymbol<LockRelFn>,
    disable_all: RawSymbol<UserScnFn>,
    restore_all: RawSymbol<UserScnFn>,
    // Keeps the loaded library mapped for the symbols above
    _lib: Library,
}

impl LibPowerHal {
    /// Resolve the vendor library, aborting the process on failure
    ///
    /// A device without a working `libpowerhal.so` must not serve power
    /// requests at all, so there is no recoverable path out of a resolution
    /// failure.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(lib) => lib,
            Err(e) => {
                tracing::error!("{}", e);
                std::process::abort();
            }
        }
    }

    /// Resolve the vendor library, reporting failures to the caller
    pub fn try_load() -> Result<Self, HintLibError> {
        Self::try_load_from(POWERHAL_LIB)
    }

    fn try_load_from(name: &'static str) -> Result<Self, HintLibError> {
        // SAFETY: dlopen runs the vendor library's constructors; libpowerhal
        // is built to be loaded into HAL processes.
        let lib = unsafe { Library::new(name) }
            .map_err(|source| HintLibError::Library { name, source })?;

        // SAFETY: the function types above are the vendor prototypes for
        // each entry point.
        let loaded = unsafe {
            Self {
                init: resolve(&lib, INIT_SYMBOL)?,
                acquire: resolve(&lib, CUS_LOCK_HINT_SYMBOL)?,
                release: resolve(&lib, LOCK_REL_SYMBOL)?,
                disable_all: resolve(&lib, USER_SCN_DISABLE_ALL_SYMBOL)?,
                restore_all: resolve(&lib, USER_SCN_RESTORE_ALL_SYMBOL)?,
                _lib: lib,
            }
        };

        tracing::info!("Loaded {} with all vendor entry points", name);
        Ok(loaded)
    }
}

/// Resolve one symbol and detach it from the library borrow.
///
/// # Safety
///
/// `T` must be the exact C prototype of the named entry point.
unsafe fn resolve<T>(lib: &Library, name: &'static str) -> Result<RawSymbol<T>, HintLibError> {
    let symbol = unsafe { lib.get::<T>(name.as_bytes()) }
        .map_err(|source| HintLibError::Symbol { name, source })?;
    Ok(symbol.into_raw())
}

impl HintProvider for LibPowerHal {
    fn init(&self, mode: i32) {
        tracing::debug!("{}({})", INIT_SYMBOL, mode);
        unsafe { (self.init)(mode) }
    }

    fn acquire_lock(&self, hint: i32, duration_ms: i32, pid: i32) -> i32 {
        unsafe { (self.acquire)(hint, duration_ms, pid) }
    }

    fn release_lock(&self, handle: i32) {
        unsafe { (self.release)(handle) }
    }

    fn disable_all(&self) {
        unsafe { (self.disable_all)() }
    }

    fn restore_all(&self) {
        unsafe { (self.restore_all)() }
    }
}
