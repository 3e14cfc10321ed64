//! Shared helpers for integration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Every environment variable the server configuration reads.
pub const HELPBOARD_VARIABLES: [&str; 5] = [
    "HELPBOARD_BIND",
    "HELPBOARD_DATA_DIR",
    "HELPBOARD_DATA_FILE",
    "HELPBOARD_API_PREFIX",
    "HELPBOARD_LOG",
];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive view of the `HELPBOARD_*` environment for one test.
///
/// On creation every configuration variable is cleared and only the given
/// ones are set. The values seen before the test come back on drop.
pub struct HelpboardEnv {
    saved: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl HelpboardEnv {
    /// Clears the configuration variables, then sets `values`.
    pub fn with(values: &[(&str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let saved = HELPBOARD_VARIABLES
            .iter()
            .map(|key| (*key, env::var_os(key)))
            .collect();

        unsafe {
            // SAFETY: ENV_LOCK is held, so no other test touches the environment.
            for key in HELPBOARD_VARIABLES {
                env::remove_var(key);
            }
            for (key, value) in values {
                env::set_var(key, value);
            }
        }

        Self { saved, _lock: lock }
    }

    /// Runs with no configuration variables set.
    pub fn cleared() -> Self {
        Self::with(&[])
    }
}

impl Drop for HelpboardEnv {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: the lock guard is still held until this value is gone.
            for (key, value) in &self.saved {
                match value {
                    Some(previous) => env::set_var(key, previous),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
