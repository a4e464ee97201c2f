//! Native side of the bridge
//!
//! The native library is notified through five fixed entry points. On
//! Android these are the JNI exports named in [`crate::symbols`]; elsewhere
//! any [`NativeEntryPoints`] implementation can stand in for the library.

pub mod logging;
pub mod recorder;

#[cfg(target_os = "android")]
pub mod jni;

pub use logging::LoggingEntryPoints;
pub use recorder::RecordingEntryPoints;

use crate::bridge::{BackendHandle, InitStatus, UtteranceId};
use crate::symbols::EntryPoint;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The five notifiers exported by the native library
///
/// Every call carries the handle of the bridge that made it. Implementations
/// must not assume calls arrive on one thread.
pub trait NativeEntryPoints {
    /// Engine ready or failed
    fn notify_init(&self, handle: BackendHandle, status: InitStatus) -> Result<()>;

    /// Utterance began playback
    fn notify_start(&self, handle: BackendHandle, utterance_id: &str) -> Result<()>;

    /// Utterance stopped. Single-argument relay, there is no interrupted flag.
    fn notify_stop(&self, handle: BackendHandle, utterance_id: &str) -> Result<()>;

    /// Utterance completed normally
    fn notify_done(&self, handle: BackendHandle, utterance_id: &str) -> Result<()>;

    /// Legacy error hook, carries no error code
    fn notify_error(&self, handle: BackendHandle, utterance_id: &str) -> Result<()>;
}

impl<N: NativeEntryPoints + ?Sized> NativeEntryPoints for &N {
    fn notify_init(&self, handle: BackendHandle, status: InitStatus) -> Result<()> {
        (**self).notify_init(handle, status)
    }

    fn notify_start(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        (**self).notify_start(handle, utterance_id)
    }

    fn notify_stop(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        (**self).notify_stop(handle, utterance_id)
    }

    fn notify_done(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        (**self).notify_done(handle, utterance_id)
    }

    fn notify_error(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        (**self).notify_error(handle, utterance_id)
    }
}

impl<N: NativeEntryPoints + ?Sized> NativeEntryPoints for Arc<N> {
    fn notify_init(&self, handle: BackendHandle, status: InitStatus) -> Result<()> {
        (**self).notify_init(handle, status)
    }

    fn notify_start(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        (**self).notify_start(handle, utterance_id)
    }

    fn notify_stop(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        (**self).notify_stop(handle, utterance_id)
    }

    fn notify_done(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        (**self).notify_done(handle, utterance_id)
    }

    fn notify_error(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        (**self).notify_error(handle, utterance_id)
    }
}

/// One call into a native entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entry_point", rename_all = "snake_case")]
pub enum NativeCall {
    Init {
        handle: BackendHandle,
        status: InitStatus,
    },
    Start {
        handle: BackendHandle,
        utterance_id: UtteranceId,
    },
    Stop {
        handle: BackendHandle,
        utterance_id: UtteranceId,
    },
    Done {
        handle: BackendHandle,
        utterance_id: UtteranceId,
    },
    Error {
        handle: BackendHandle,
        utterance_id: UtteranceId,
    },
}

impl NativeCall {
    /// Handle of the bridge that made the call
    pub fn handle(&self) -> BackendHandle {
        match self {
            NativeCall::Init { handle, .. }
            | NativeCall::Start { handle, .. }
            | NativeCall::Stop { handle, .. }
            | NativeCall::Done { handle, .. }
            | NativeCall::Error { handle, .. } => *handle,
        }
    }

    /// Which entry point received the call
    pub fn entry_point(&self) -> EntryPoint {
        match self {
            NativeCall::Init { .. } => EntryPoint::Init,
            NativeCall::Start { .. } => EntryPoint::Start,
            NativeCall::Stop { .. } => EntryPoint::StopRelay,
            NativeCall::Done { .. } => EntryPoint::Done,
            NativeCall::Error { .. } => EntryPoint::Error,
        }
    }

    /// Utterance id payload, `None` for init
    pub fn utterance_id(&self) -> Option<&UtteranceId> {
        match self {
            NativeCall::Init { .. } => None,
            NativeCall::Start { utterance_id, .. }
            | NativeCall::Stop { utterance_id, .. }
            | NativeCall::Done { utterance_id, .. }
            | NativeCall::Error { utterance_id, .. } => Some(utterance_id),
        }
    }

    /// Replay this call against another set of entry points
    pub fn dispatch<N: NativeEntryPoints + ?Sized>(&self, native: &N) -> Result<()> {
        match self {
            NativeCall::Init { handle, status } => native.notify_init(*handle, *status),
            NativeCall::Start {
                handle,
                utterance_id,
            } => native.notify_start(*handle, utterance_id.as_str()),
            NativeCall::Stop {
                handle,
                utterance_id,
            } => native.notify_stop(*handle, utterance_id.as_str()),
            NativeCall::Done {
                handle,
                utterance_id,
            } => native.notify_done(*handle, utterance_id.as_str()),
            NativeCall::Error {
                handle,
                utterance_id,
            } => native.notify_error(*handle, utterance_id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_call_has_no_interrupted_field() {
        let call = NativeCall::Stop {
            handle: BackendHandle::new(7),
            utterance_id: UtteranceId::from("utt-1"),
        };
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"entry_point": "stop", "handle": 7, "utterance_id": "utt-1"})
        );
    }

    #[test]
    fn test_accessors() {
        let init = NativeCall::Init {
            handle: BackendHandle::new(3),
            status: InitStatus::SUCCESS,
        };
        assert_eq!(init.handle(), BackendHandle::new(3));
        assert_eq!(init.entry_point(), EntryPoint::Init);
        assert!(init.utterance_id().is_none());

        let done = NativeCall::Done {
            handle: BackendHandle::new(4),
            utterance_id: UtteranceId::from("a"),
        };
        assert_eq!(done.entry_point(), EntryPoint::Done);
        assert_eq!(done.utterance_id().map(|id| id.as_str()), Some("a"));
    }

    #[test]
    fn test_dispatch_through_arc() {
        let recorder = Arc::new(RecordingEntryPoints::new());
        let call = NativeCall::Error {
            handle: BackendHandle::new(9),
            utterance_id: UtteranceId::from("x"),
        };
        call.dispatch(&recorder).unwrap();
        assert_eq!(recorder.calls(), vec![call]);
    }
}
