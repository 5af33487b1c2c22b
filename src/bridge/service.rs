//! The two callable operations and the load-time registration sequence.

use jni::sys::{jint, JNI_VERSION_1_6};

use crate::common::error::{BridgeError, BridgeResult};

use super::domain::{MethodBinder, BRIDGE_CLASS, NATIVE_VERSION, REGISTRATION_TABLE};

/// JNI version requested from the runtime on a successful load.
pub const JNI_VERSION: jint = JNI_VERSION_1_6;

/// Version string of the native library.
pub fn native_version() -> &'static str {
    NATIVE_VERSION
}

/// Report the library as ready. Emits one info record per call.
pub fn initialize() -> bool {
    log::info!("Native library initialized");
    true
}

/// Resolve [`BRIDGE_CLASS`] and bind the registration table onto it.
pub fn register_natives<B: MethodBinder>(binder: &mut B) -> BridgeResult<()> {
    let class = binder
        .find_class(BRIDGE_CLASS)
        .map_err(|source| BridgeError::ClassNotFound {
            class: BRIDGE_CLASS,
            source,
        })?;

    binder
        .register(&class, &REGISTRATION_TABLE)
        .map_err(|source| BridgeError::RegistrationFailed {
            class: BRIDGE_CLASS,
            source,
        })
}

/// Run registration and translate the outcome into the `JNI_OnLoad` status.
pub fn load<B: MethodBinder>(binder: &mut B) -> jint {
    match register_natives(binder) {
        Ok(()) => {
            log::debug!(
                "registered {} native methods on {BRIDGE_CLASS}",
                REGISTRATION_TABLE.len()
            );
            JNI_VERSION
        }
        Err(err) => reject(err),
    }
}

/// Log a load failure and return its status code.
pub fn reject(err: BridgeError) -> jint {
    match std::error::Error::source(&err) {
        Some(cause) => log::error!("native bridge load failed: {err}: {cause}"),
        None => log::error!("native bridge load failed: {err}"),
    }
    err.code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::domain::NativeMethodSpec;
    use crate::common::error::BoxError;
    use jni::sys::JNI_ERR;

    #[derive(Default)]
    struct FakeBinder {
        missing_class: bool,
        reject_registration: bool,
        lookups: Vec<String>,
        bound: Vec<(String, &'static str)>,
    }

    impl MethodBinder for FakeBinder {
        type Class = String;

        fn find_class(&mut self, name: &str) -> Result<String, BoxError> {
            self.lookups.push(name.to_string());
            if self.missing_class {
                Err(format!("java/lang/NoClassDefFoundError: {name}").into())
            } else {
                Ok(name.to_string())
            }
        }

        fn register(
            &mut self,
            class: &String,
            table: &[NativeMethodSpec],
        ) -> Result<(), BoxError> {
            if self.reject_registration {
                return Err("RegisterNatives returned -1".into());
            }
            self.bound
                .extend(table.iter().map(|m| (class.clone(), m.name)));
            Ok(())
        }
    }

    #[test]
    fn version_is_fixed() {
        for _ in 0..16 {
            assert_eq!(native_version(), "1.0.0");
        }
    }

    #[test]
    fn initialize_always_succeeds() {
        assert!(initialize());
        assert!(initialize());
    }

    #[test]
    fn load_binds_both_methods() {
        let mut binder = FakeBinder::default();
        assert_eq!(load(&mut binder), JNI_VERSION_1_6);
        assert_eq!(binder.lookups, vec![BRIDGE_CLASS.to_string()]);
        assert_eq!(
            binder.bound,
            vec![
                (BRIDGE_CLASS.to_string(), "getNativeVersion"),
                (BRIDGE_CLASS.to_string(), "initialize"),
            ]
        );
    }

    #[test]
    fn missing_class_fails_without_binding() {
        let mut binder = FakeBinder {
            missing_class: true,
            ..FakeBinder::default()
        };
        let err = register_natives(&mut binder).unwrap_err();
        assert!(matches!(err, BridgeError::ClassNotFound { class, .. } if class == BRIDGE_CLASS));
        assert!(binder.bound.is_empty());

        assert_eq!(load(&mut binder), JNI_ERR);
        assert!(binder.bound.is_empty());
    }

    #[test]
    fn rejected_registration_fails_the_load() {
        let mut binder = FakeBinder {
            reject_registration: true,
            ..FakeBinder::default()
        };
        let err = register_natives(&mut binder).unwrap_err();
        assert!(matches!(err, BridgeError::RegistrationFailed { .. }));
        assert_eq!(load(&mut binder), JNI_ERR);
    }
}
