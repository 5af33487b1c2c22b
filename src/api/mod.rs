//! Foreign entry points exposed to the managed runtime.

pub mod ffi;
