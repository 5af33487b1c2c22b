//! Shared utilities: configuration, errors and logging.
pub mod config;
pub mod error;
pub mod log;

pub use config::BridgeCfg;
pub use error::{BoxError, BridgeError, BridgeResult};
