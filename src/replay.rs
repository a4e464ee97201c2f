//! Replay recorded lifecycle events through a bridge
//!
//! Events are JSON lines, one callback each:
//!
//! ```text
//! {"event":"init","status":0}
//! {"event":"start","utterance_id":"utt-1"}
//! {"event":"stop","utterance_id":"utt-1","interrupted":true}
//! ```

use crate::bridge::{InitListener, InitStatus, UtteranceListener};
use crate::{BridgeError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A platform callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BridgeEvent {
    Init {
        status: InitStatus,
    },
    Start {
        utterance_id: String,
    },
    Stop {
        utterance_id: String,
        #[serde(default)]
        interrupted: bool,
    },
    Done {
        utterance_id: String,
    },
    Error {
        utterance_id: String,
    },
}

impl BridgeEvent {
    /// Deliver this event to `listener` the way the platform would
    pub fn deliver<L>(&self, listener: &L) -> Result<()>
    where
        L: InitListener + UtteranceListener + ?Sized,
    {
        match self {
            BridgeEvent::Init { status } => listener.on_init(*status),
            BridgeEvent::Start { utterance_id } => listener.on_start(utterance_id),
            BridgeEvent::Stop {
                utterance_id,
                interrupted,
            } => listener.on_stop(utterance_id, *interrupted),
            BridgeEvent::Done { utterance_id } => listener.on_done(utterance_id),
            BridgeEvent::Error { utterance_id } => listener.on_error(utterance_id),
        }
    }
}

/// Parse one JSON line. `line` is 1-based, for error messages.
pub fn parse_event(text: &str, line: usize) -> Result<BridgeEvent> {
    serde_json::from_str(text).map_err(|e| BridgeError::Replay {
        line,
        message: e.to_string(),
    })
}

/// Deliver every event from `reader` in order, returning how many were sent
///
/// Blank lines are skipped. Stops at the first parse or native error; a
/// line that is not valid UTF-8 counts as a parse error.
pub fn replay<L, R>(listener: &L, reader: R) -> Result<usize>
where
    L: InitListener + UtteranceListener + ?Sized,
    R: BufRead,
{
    let mut delivered = 0;

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let line = String::from_utf8(bytes?).map_err(|e| BridgeError::Replay {
            line: idx + 1,
            message: e.to_string(),
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let event = parse_event(text, idx + 1)?;
        debug!("Replaying {:?}", event);
        event.deliver(listener)?;
        delivered += 1;
    }

    Ok(delivered)
}
