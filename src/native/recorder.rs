//! Entry points that record every call

use super::{NativeCall, NativeEntryPoints};
use crate::bridge::{BackendHandle, InitStatus, UtteranceId};
use crate::Result;
use log::trace;
use std::sync::{Mutex, MutexGuard};

/// Records native calls in arrival order
///
/// Safe to share between bridges and threads.
#[derive(Debug, Default)]
pub struct RecordingEntryPoints {
    calls: Mutex<Vec<NativeCall>>,
}

impl RecordingEntryPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call so far
    pub fn calls(&self) -> Vec<NativeCall> {
        self.lock_or_recover().clone()
    }

    /// Calls made by one backend
    pub fn calls_for(&self, handle: BackendHandle) -> Vec<NativeCall> {
        self.lock_or_recover()
            .iter()
            .filter(|call| call.handle() == handle)
            .cloned()
            .collect()
    }

    /// Drain the recorded calls
    pub fn take(&self) -> Vec<NativeCall> {
        std::mem::take(&mut *self.lock_or_recover())
    }

    pub fn len(&self) -> usize {
        self.lock_or_recover().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_or_recover().is_empty()
    }

    fn record(&self, call: NativeCall) -> Result<()> {
        trace!("Recording native call: {:?}", call);
        self.lock_or_recover().push(call);
        Ok(())
    }

    // A panic elsewhere must not stop recording or hide earlier calls.
    fn lock_or_recover(&self) -> MutexGuard<'_, Vec<NativeCall>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NativeEntryPoints for RecordingEntryPoints {
    fn notify_init(&self, handle: BackendHandle, status: InitStatus) -> Result<()> {
        self.record(NativeCall::Init { handle, status })
    }

    fn notify_start(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        self.record(NativeCall::Start {
            handle,
            utterance_id: UtteranceId::from(utterance_id),
        })
    }

    fn notify_stop(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        self.record(NativeCall::Stop {
            handle,
            utterance_id: UtteranceId::from(utterance_id),
        })
    }

    fn notify_done(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        self.record(NativeCall::Done {
            handle,
            utterance_id: UtteranceId::from(utterance_id),
        })
    }

    fn notify_error(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        self.record(NativeCall::Error {
            handle,
            utterance_id: UtteranceId::from(utterance_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recorder_is_empty() {
        let recorder = RecordingEntryPoints::new();
        assert!(recorder.is_empty());
        assert_eq!(recorder.len(), 0);
    }

    #[test]
    fn test_records_in_order() {
        let recorder = RecordingEntryPoints::new();
        let handle = BackendHandle::new(1);
        recorder.notify_start(handle, "a").unwrap();
        recorder.notify_done(handle, "a").unwrap();

        let calls = recorder.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], NativeCall::Start { .. }));
        assert!(matches!(calls[1], NativeCall::Done { .. }));
    }

    #[test]
    fn test_records_after_poisoned_lock() {
        let recorder = std::sync::Arc::new(RecordingEntryPoints::new());
        recorder.notify_start(BackendHandle::new(1), "before").unwrap();

        let poisoner = std::sync::Arc::clone(&recorder);
        let result = std::thread::spawn(move || {
            let _guard = poisoner.calls.lock().unwrap();
            panic!("poison the recorder lock");
        })
        .join();
        assert!(result.is_err());
        assert!(recorder.calls.is_poisoned());

        recorder.notify_done(BackendHandle::new(1), "after").unwrap();
        let calls = recorder.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].utterance_id().map(|id| id.as_str()), Some("after"));
    }

    #[test]
    fn test_calls_for_and_take() {
        let recorder = RecordingEntryPoints::new();
        recorder.notify_start(BackendHandle::new(1), "a").unwrap();
        recorder.notify_start(BackendHandle::new(2), "a").unwrap();

        assert_eq!(recorder.calls_for(BackendHandle::new(2)).len(), 1);
        assert_eq!(recorder.take().len(), 2);
        assert!(recorder.is_empty());
    }
}
