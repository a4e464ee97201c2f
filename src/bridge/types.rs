//! Values carried across the bridge

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which native backend instance a bridge serves
///
/// Assigned once when the bridge is built. The native library uses it as the
/// key for its own backend lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendHandle(i32);

impl BackendHandle {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn id(self) -> i32 {
        self.0
    }
}

impl From<i32> for BackendHandle {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque token correlating lifecycle events to a synthesis request
///
/// Never trimmed, normalized or re-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtteranceId(String);

impl UtteranceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for UtteranceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UtteranceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for UtteranceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Engine initialization status reported by the platform
///
/// Forwarded as-is. The named constants only exist to make logs readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitStatus(i32);

impl InitStatus {
    /// `TextToSpeech.SUCCESS`
    pub const SUCCESS: InitStatus = InitStatus(0);
    /// `TextToSpeech.ERROR`
    pub const ERROR: InitStatus = InitStatus(-1);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

impl From<i32> for InitStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for InitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SUCCESS => write!(f, "{} (success)", self.0),
            Self::ERROR => write!(f, "{} (error)", self.0),
            _ => write!(f, "{}", self.0),
        }
    }
}
