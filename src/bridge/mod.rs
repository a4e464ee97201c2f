//! The listener bridge
//!
//! A [`Bridge`] is registered as the init and utterance-progress listener
//! for one platform engine. Every callback is relayed synchronously into
//! the native entry points, tagged with the bridge's [`BackendHandle`].

pub mod listener;
pub mod types;

pub use listener::{Bridge, InitListener, UtteranceListener};
pub use types::{BackendHandle, InitStatus, UtteranceId};
