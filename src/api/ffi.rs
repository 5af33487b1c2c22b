//! JNI surface loaded by the managed runtime.
//!
//! `JNI_OnLoad` binds the registration table explicitly. The entry points are
//! also exported under their mangled names so lazy symbol lookup resolves to
//! the same functions.

use std::ffi::c_void;

use jni::objects::{JClass, JObject};
use jni::errors::{jni_error_code_to_result, Error as JniFailure};
use jni::sys::{jboolean, jint, jstring, JNI_FALSE, JNI_TRUE, JNI_VERSION_1_6};
use jni::{JNIEnv, NativeMethod};

use crate::bridge::{self, Entry, MethodBinder, NativeMethodSpec};
use crate::common::config::BridgeCfg;
use crate::common::error::{BoxError, BridgeError};

/// `String getNativeVersion()`
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_dev_aurakai_auraframefx_native_NativeBridge_getNativeVersion<
    'local,
>(
    env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    match env.new_string(bridge::native_version()) {
        Ok(version) => version.into_raw(),
        Err(err) => {
            // The pending OutOfMemoryError is rethrown on the managed side.
            log::error!("getNativeVersion: {err}");
            std::ptr::null_mut()
        }
    }
}

/// `boolean initialize()`
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_dev_aurakai_auraframefx_native_NativeBridge_initialize<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jboolean {
    if bridge::initialize() {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

fn entry_ptr(entry: Entry) -> *mut c_void {
    match entry {
        Entry::NativeVersion => {
            Java_dev_aurakai_auraframefx_native_NativeBridge_getNativeVersion as *mut c_void
        }
        Entry::Initialize => {
            Java_dev_aurakai_auraframefx_native_NativeBridge_initialize as *mut c_void
        }
    }
}

/// [`MethodBinder`] backed by a live `JNIEnv`.
struct EnvBinder<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
}

impl<'a, 'local> MethodBinder for EnvBinder<'a, 'local> {
    type Class = JClass<'local>;

    fn find_class(&mut self, name: &str) -> Result<JClass<'local>, BoxError> {
        Ok(self.env.find_class(name)?)
    }

    fn register(
        &mut self,
        class: &JClass<'local>,
        table: &[NativeMethodSpec],
    ) -> Result<(), BoxError> {
        let methods: Vec<NativeMethod> = table
            .iter()
            .map(|spec| NativeMethod {
                name: spec.name.into(),
                sig: spec.signature.into(),
                fn_ptr: entry_ptr(spec.entry),
            })
            .collect();
        self.env.register_native_methods(class, &methods)?;
        Ok(())
    }
}

/// Fetch the loading thread's environment, requiring JNI 1.6.
fn env_v6<'local>(vm: *mut jni::sys::JavaVM) -> Result<JNIEnv<'local>, JniFailure> {
    // SAFETY: a non-null `vm` is the runtime's JavaVM, whose function table
    // outlives the process.
    let get_env = unsafe {
        if vm.is_null() || (*vm).is_null() {
            return Err(JniFailure::NullPtr("JavaVM"));
        }
        (**vm).GetEnv
    }
    .ok_or(JniFailure::JavaVMMethodNotFound("GetEnv"))?;

    let mut env: *mut c_void = std::ptr::null_mut();
    // SAFETY: `GetEnv` only writes the out-pointer.
    jni_error_code_to_result(unsafe { get_env(vm, &mut env, JNI_VERSION_1_6) })?;
    // SAFETY: on JNI_OK the runtime stored a valid JNIEnv for this thread.
    unsafe { JNIEnv::from_raw(env.cast()) }
}

/// Library load hook invoked once by the runtime.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    crate::common::log::init(&BridgeCfg::load());

    let mut env = match env_v6(vm) {
        Ok(env) => env,
        Err(err) => return bridge::service::reject(BridgeError::EnvUnavailable(err)),
    };

    bridge::load(&mut EnvBinder { env: &mut env })
}
