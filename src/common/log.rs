//! Logger installation for the `log` facade.
//!
//! Android builds route records to logcat; every other target (desktop JVMs,
//! tests) writes to stderr. Installation happens at most once per process.

use crate::common::config::BridgeCfg;

/// Install the platform logger. Later calls are no-ops.
#[cfg(target_os = "android")]
pub fn init(cfg: &BridgeCfg) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(cfg.log_level)
            .with_tag(cfg.log_tag.as_str()),
    );
}

/// Install the platform logger. Later calls are no-ops.
#[cfg(not(target_os = "android"))]
pub fn init(cfg: &BridgeCfg) {
    // A host process may already own the global logger.
    let _ = env_logger::Builder::new()
        .filter_level(cfg.log_level)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        let cfg = BridgeCfg::default();
        init(&cfg);
        init(&cfg);
    }
}
