//! JNI glue for Android
//!
//! The `tts` crate exports the listener's native methods
//! (`Java_rs_tts_Bridge_onInit`, `onStart`, `onStop`, `onDone`, `onError`).
//! Its `onStop` takes only the utterance id, while the platform callback is
//! `onStop(String, boolean)`. The Java listener implements that callback
//! itself and calls `nativeOnStop(String)`, which is exported here and
//! handed straight to the crate's one-argument `onStop`.

use crate::config::Config;
use crate::logging::init_logging;
use crate::symbols::EntryPointTable;
use crate::{BridgeError, Result};
use jni::objects::{JClass, JObject, JString};
use jni::sys::{jboolean, jobject, jstring, JNIEnv as RawEnv, JNI_FALSE, JNI_TRUE};
use jni::JNIEnv;
use log::{debug, error, info};
// Links the crate that exports the Java_rs_tts_Bridge_* notifiers.
use tts as _;

extern "C" {
    fn Java_rs_tts_Bridge_onStop(env: *mut RawEnv, obj: jobject, utterance_id: jstring);
}

/// `Bridge.nativeOnStop(String)`
///
/// # Safety
///
/// Only the JVM calls this, with a valid environment, the `Bridge` instance
/// and a `String` reference.
#[no_mangle]
pub unsafe extern "system" fn Java_rs_tts_Bridge_nativeOnStop(
    env: JNIEnv,
    obj: JObject,
    utterance_id: JString,
) {
    debug!("nativeOnStop: forwarding to onStop");
    Java_rs_tts_Bridge_onStop(env.get_raw(), obj.as_raw(), utterance_id.as_raw());
}

/// `static native boolean BridgeSetup.attach()`
///
/// The app calls this once from the main thread, before creating any
/// `TextToSpeech` with a `Bridge` listener. Returns false when the listener
/// class cannot be resolved.
#[no_mangle]
pub extern "system" fn Java_rs_tts_BridgeSetup_attach(mut env: JNIEnv, _class: JClass) -> jboolean {
    // The config directory is usually not writable from an app process.
    let config = Config::load().unwrap_or_default();

    match attach(&mut env, &config) {
        Ok(()) => {
            info!("Bridge attached for {}", config.class_name());
            JNI_TRUE
        }
        Err(e) => {
            error!("Bridge attach failed: {}", e);
            JNI_FALSE
        }
    }
}

/// Set up logging and make sure the listener class resolves
///
/// Must run on the main thread: later callback threads cannot see the app
/// class loader.
pub fn attach(env: &mut JNIEnv, config: &Config) -> Result<()> {
    init_logging(config);
    let table = EntryPointTable::for_class(&config.class_name())?;
    verify_bridge_class(env, table.class())?;

    for (entry_point, symbol) in table.iter() {
        debug!("{} -> {}", entry_point, symbol);
    }
    Ok(())
}

/// Look up the listener class through `env`
pub fn verify_bridge_class(env: &mut JNIEnv, class: &str) -> Result<()> {
    let internal = class.replace('.', "/");
    match env.find_class(&internal) {
        Ok(_) => {
            info!("Found listener class {}", internal);
            Ok(())
        }
        Err(e) => {
            // find_class leaves a ClassNotFoundException pending.
            let _ = env.exception_clear();
            error!("Failed to find listener class {}: {:?}", internal, e);
            Err(BridgeError::Native(format!(
                "Listener class {} not found: {}",
                internal, e
            )))
        }
    }
}
