//! Platform listener contract and the bridge that implements it

use super::types::{BackendHandle, InitStatus};
use crate::config::Config;
use crate::native::NativeEntryPoints;
use crate::Result;
use log::{debug, info};

/// `TextToSpeech.OnInitListener`
pub trait InitListener {
    /// Called once when the engine is ready or has failed
    fn on_init(&self, status: InitStatus) -> Result<()>;
}

/// `UtteranceProgressListener`
pub trait UtteranceListener {
    fn on_start(&self, utterance_id: &str) -> Result<()>;

    /// `interrupted` is true when the stop came from an explicit cancel
    /// rather than a queue flush
    fn on_stop(&self, utterance_id: &str, interrupted: bool) -> Result<()>;

    fn on_done(&self, utterance_id: &str) -> Result<()>;

    /// Legacy single-argument error hook
    fn on_error(&self, utterance_id: &str) -> Result<()>;
}

/// Relays platform callbacks to the native library for one backend
///
/// Holds nothing mutable, so callbacks may arrive on any thread. Native
/// failures are returned to the caller as-is; nothing is retried or
/// buffered.
pub struct Bridge<N> {
    /// Backend this bridge reports for
    handle: BackendHandle,

    /// Native library entry points
    native: N,

    /// Log the interrupted flag on stop before it is dropped
    log_interrupted: bool,
}

impl<N: NativeEntryPoints> Bridge<N> {
    /// Create a bridge for `handle`
    ///
    /// Does not register anything with the platform; the caller installs the
    /// bridge as the engine's listener.
    pub fn new(handle: impl Into<BackendHandle>, native: N) -> Self {
        let handle = handle.into();
        info!("Bridge created with backendId={}", handle);
        Self {
            handle,
            native,
            log_interrupted: true,
        }
    }

    /// Create a bridge using the `[bridge]` settings from `config`
    pub fn with_config(handle: impl Into<BackendHandle>, native: N, config: &Config) -> Self {
        let mut bridge = Self::new(handle, native);
        bridge.log_interrupted = config.log_interrupted();
        bridge
    }

    pub fn handle(&self) -> BackendHandle {
        self.handle
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    /// Single-argument stop relay matching the exported `nativeOnStop`
    fn native_on_stop(&self, utterance_id: &str) -> Result<()> {
        self.native.notify_stop(self.handle, utterance_id)
    }
}

impl<N: NativeEntryPoints> InitListener for Bridge<N> {
    fn on_init(&self, status: InitStatus) -> Result<()> {
        debug!("onInit: backend={} status={}", self.handle, status);
        self.native.notify_init(self.handle, status)
    }
}

impl<N: NativeEntryPoints> UtteranceListener for Bridge<N> {
    fn on_start(&self, utterance_id: &str) -> Result<()> {
        self.native.notify_start(self.handle, utterance_id)
    }

    // The native stop notifier takes only the utterance id, so the flag ends
    // here. It is logged and nothing else.
    fn on_stop(&self, utterance_id: &str, interrupted: bool) -> Result<()> {
        if self.log_interrupted {
            debug!(
                "onStop: backend={} utterance={:?}, interrupted={}",
                self.handle, utterance_id, interrupted
            );
        }
        self.native_on_stop(utterance_id)
    }

    fn on_done(&self, utterance_id: &str) -> Result<()> {
        self.native.notify_done(self.handle, utterance_id)
    }

    fn on_error(&self, utterance_id: &str) -> Result<()> {
        self.native.notify_error(self.handle, utterance_id)
    }
}
