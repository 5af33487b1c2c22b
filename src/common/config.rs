//! Runtime configuration loaded from the process environment.

use std::env;

use log::LevelFilter;

/// Default Android log tag, shared with the managed side's logcat filters.
pub const DEFAULT_LOG_TAG: &str = "AuraFrameFX_Native";

/// Snapshot of configuration values consumed by the bridge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BridgeCfg {
    pub log_level: LevelFilter,
    pub log_tag: String,
}

impl BridgeCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("AURAFX_NATIVE_LOG_LEVEL")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        let log_tag = lookup("AURAFX_NATIVE_LOG_TAG")
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_TAG.to_string());

        Self { log_level, log_tag }
    }
}

impl Default for BridgeCfg {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
