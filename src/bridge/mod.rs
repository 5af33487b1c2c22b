//! Native bridge: the exposed operations and their registration onto the
//! managed `NativeBridge` class.

pub mod domain;
pub mod service;

pub use domain::{
    Entry, MethodBinder, NativeMethodSpec, BRIDGE_CLASS, NATIVE_VERSION, REGISTRATION_TABLE,
};
pub use service::{initialize, load, native_version, register_natives, JNI_VERSION};
