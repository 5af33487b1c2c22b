//! Native side of the AuraFrameFX JNI bridge.
pub mod api;
pub mod bridge;
pub mod common;

pub use bridge::{initialize, native_version, BRIDGE_CLASS, NATIVE_VERSION};
pub use common::{BridgeCfg, BridgeError, BridgeResult};
