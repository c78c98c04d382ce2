//! Scoped environment overrides for tests that exercise `Config::from_env`.
//!
//! The process environment is global, so every [`ScopedEnv`] holds one shared
//! lock for its whole lifetime and puts the previous values back on drop.

use crate::config::CONFIG_ENV_VARS;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Exclusive, self-restoring view of the process environment.
pub struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Wait for exclusive access to the environment.
    ///
    /// A panic in another holder does not poison later users; the values it
    /// changed were already restored by its drop.
    pub fn lock() -> Self {
        Self {
            saved: Vec::new(),
            _lock: env_lock().lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Like [`Self::lock`], with every configuration variable unset.
    pub fn clean() -> Self {
        let mut scoped = Self::lock();
        for key in CONFIG_ENV_VARS {
            scoped.unset(key);
        }
        scoped
    }

    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.remember(key);
        std::env::set_var(key, value);
        self
    }

    pub fn unset(&mut self, key: &str) -> &mut Self {
        self.remember(key);
        std::env::remove_var(key);
        self
    }

    fn remember(&mut self, key: &str) {
        if self.saved.iter().all(|(saved, _)| saved != key) {
            self.saved.push((key.to_string(), std::env::var(key).ok()));
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            match previous {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}
