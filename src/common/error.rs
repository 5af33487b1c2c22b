//! Error handling primitives shared across the bridge.
//!
//! Every failure here happens while the runtime loads the library; the two
//! callable entry points never fail.

use jni::sys::{jint, JNI_ERR};
use thiserror::Error;

/// Boxed error produced by a [`crate::bridge::MethodBinder`] backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Canonical error type for library loading.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The runtime did not hand out a usable JNI environment.
    #[error("JNI environment unavailable")]
    EnvUnavailable(#[source] jni::errors::Error),

    /// The managed class declaring the native slots could not be resolved.
    #[error("class `{class}` not found")]
    ClassNotFound {
        class: &'static str,
        #[source]
        source: BoxError,
    },

    /// The runtime rejected the registration table.
    #[error("failed to register native methods on `{class}`")]
    RegistrationFailed {
        class: &'static str,
        #[source]
        source: BoxError,
    },
}

/// Result alias used throughout the crate.
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Status code handed back to the runtime from `JNI_OnLoad`.
    pub fn code(&self) -> jint {
        match self {
            BridgeError::EnvUnavailable(_)
            | BridgeError::ClassNotFound { .. }
            | BridgeError::RegistrationFailed { .. } => JNI_ERR,
        }
    }
}
