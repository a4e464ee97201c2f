//! Entry points that log each call before handing it on

use super::NativeEntryPoints;
use crate::bridge::{BackendHandle, InitStatus};
use crate::Result;
use log::info;

/// Logs every native call at info level, then delegates to `inner`
pub struct LoggingEntryPoints<N> {
    inner: N,
}

impl<N: NativeEntryPoints> LoggingEntryPoints<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }

    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: NativeEntryPoints> NativeEntryPoints for LoggingEntryPoints<N> {
    fn notify_init(&self, handle: BackendHandle, status: InitStatus) -> Result<()> {
        info!("native onInit: backend={} status={}", handle, status);
        self.inner.notify_init(handle, status)
    }

    fn notify_start(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        info!("native onStart: backend={} utterance={:?}", handle, utterance_id);
        self.inner.notify_start(handle, utterance_id)
    }

    fn notify_stop(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        info!("native nativeOnStop: backend={} utterance={:?}", handle, utterance_id);
        self.inner.notify_stop(handle, utterance_id)
    }

    fn notify_done(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        info!("native onDone: backend={} utterance={:?}", handle, utterance_id);
        self.inner.notify_done(handle, utterance_id)
    }

    fn notify_error(&self, handle: BackendHandle, utterance_id: &str) -> Result<()> {
        info!("native onError: backend={} utterance={:?}", handle, utterance_id);
        self.inner.notify_error(handle, utterance_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::{NativeCall, RecordingEntryPoints};

    #[test]
    fn test_delegates_unchanged() {
        let logging = LoggingEntryPoints::new(RecordingEntryPoints::new());
        logging.notify_init(BackendHandle::new(2), InitStatus::new(1)).unwrap();
        logging.notify_error(BackendHandle::new(2), "e-1").unwrap();

        let calls = logging.into_inner().take();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            NativeCall::Init {
                handle: BackendHandle::new(2),
                status: InitStatus::new(1),
            }
        );
        assert_eq!(calls[1].utterance_id().map(|id| id.as_str()), Some("e-1"));
    }
}
