// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! Rather than free-floating process globals, the label prefix and the
//! verbosity tier live in an explicit [`Config`] value that is injected
//! into a [`Logger`](crate::Logger) at construction. Callers that want
//! process-wide defaults hold one shared `Arc<Config>` (the one behind
//! [`Logger::global`](crate::Logger::global) for the common case).
//!
//! Both fields use interior mutability so a shared config can be
//! reconfigured between logging calls: the prefix behind a `Mutex`, the
//! tier as an atomic since every emission reads it.

use crate::tier::Tier;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

/// Shared, reconfigurable logger settings: a label prefix and a verbosity
/// tier.
#[derive(Debug)]
pub struct Config {
    prefix: Mutex<String>,
    tier: AtomicU8,
}

impl Config {
    pub fn new(prefix: impl Into<String>, tier: Tier) -> Self {
        Self {
            prefix: Mutex::new(prefix.into()),
            tier: AtomicU8::new(tier as u8),
        }
    }

    /// The current label prefix, prepended to every emitted line.
    pub fn prefix(&self) -> String {
        self.prefix.lock().unwrap().clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        *self.prefix.lock().unwrap() = prefix.into();
    }

    /// The current verbosity tier. Events with a tier above this are
    /// suppressed without being rendered.
    pub fn tier(&self) -> Tier {
        Tier::from_u8(self.tier.load(Ordering::Relaxed))
    }

    pub fn set_tier(&self, tier: Tier) {
        self.tier.store(tier as u8, Ordering::Relaxed);
    }
}

impl Default for Config {
    /// Prefix `"Log"` and the `Regular` tier.
    fn default() -> Self {
        Self::new("Log", Tier::Regular)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::tier::Tier;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.prefix(), "Log");
        assert_eq!(config.tier(), Tier::Regular);
    }

    #[test]
    fn reconfigure() {
        let config = Config::default();
        config.set_prefix("MyApp");
        config.set_tier(Tier::Loop);
        assert_eq!(config.prefix(), "MyApp");
        assert_eq!(config.tier(), Tier::Loop);
    }
}
