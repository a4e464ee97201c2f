//! tts-bridge - native side of the Android speech-synthesis listener
//!
//! Relays `TextToSpeech.OnInitListener` and `UtteranceProgressListener`
//! callbacks into the native library's fixed JNI entry points, keyed by a
//! per-bridge backend handle. Pure synchronous pass-through: no buffering,
//! no retry, no queuing.

pub mod bridge;
pub mod config;
pub mod error;
pub mod logging;
pub mod native;
pub mod replay;
pub mod symbols;

pub use bridge::{BackendHandle, Bridge, InitListener, InitStatus, UtteranceId, UtteranceListener};
pub use error::{BridgeError, Result};
pub use native::{NativeCall, NativeEntryPoints};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "tts-bridge";
