//! Shared test helpers: environment isolation for `CARTESIA_*` variables.

use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub const SYNTH_ENV_VARS: [&str; 2] = ["CARTESIA_API_KEY", "CARTESIA_BASE_URL"];

/// Restores captured environment variables on drop.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }

    /// Capture the synthesis variables and clear them.
    pub fn cleared() -> Self {
        let guard = Self::capture(&SYNTH_ENV_VARS);
        for key in SYNTH_ENV_VARS {
            std::env::remove_var(key);
        }
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

pub fn env_lock_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
