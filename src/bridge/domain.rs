//! Registration table and the binding contract.
//!
//! Nothing in here touches JNI directly; the table is plain data and the
//! [`MethodBinder`] trait is implemented once for the real `JNIEnv` and once
//! per test fake.

use crate::common::error::BoxError;

/// Binary name of the managed class that declares the native slots.
pub const BRIDGE_CLASS: &str = "dev/aurakai/auraframefx/native/NativeBridge";

/// Version string reported to the managed side.
pub const NATIVE_VERSION: &str = "1.0.0";

/// Which native entry point a table row binds to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Entry {
    NativeVersion,
    Initialize,
}

/// One row of the registration table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NativeMethodSpec {
    pub name: &'static str,
    pub signature: &'static str,
    pub entry: Entry,
}

/// Methods bound onto [`BRIDGE_CLASS`] at load time.
pub const REGISTRATION_TABLE: [NativeMethodSpec; 2] = [
    NativeMethodSpec {
        name: "getNativeVersion",
        signature: "()Ljava/lang/String;",
        entry: Entry::NativeVersion,
    },
    NativeMethodSpec {
        name: "initialize",
        signature: "()Z",
        entry: Entry::Initialize,
    },
];

/// Backend able to resolve a class and bind a registration table onto it.
pub trait MethodBinder {
    type Class;

    fn find_class(&mut self, name: &str) -> Result<Self::Class, BoxError>;
    fn register(&mut self, class: &Self::Class, table: &[NativeMethodSpec])
        -> Result<(), BoxError>;
}
