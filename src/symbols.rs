//! JNI entry point names for the listener class
//!
//! The native library is reached through exported functions whose names the
//! JVM derives from the Java class and method (see the JNI "Resolving Native
//! Method Names" rules). Those names are fixed by the native build, so this
//! module only computes and checks them; it never invents new ones.
//!
//! The platform's `onStop(String, boolean)` has no native counterpart. The
//! library exports a one-argument stop notifier, and a two-argument native
//! method would have a different signature (and a different long-form
//! symbol, see [`platform_stop_symbol`]). The Java listener therefore
//! implements `onStop` in plain Java and relays to `nativeOnStop(String)`.

use crate::{BridgeError, Result};
use once_cell::sync::Lazy;
use std::fmt;

/// Listener class the native library was built against
pub const DEFAULT_BRIDGE_CLASS: &str = "rs.tts.Bridge";

/// Helper class whose static `attach()` sets the bridge up on Android
pub const SETUP_CLASS: &str = "rs.tts.BridgeSetup";

/// Method name and descriptor of the setup call
pub const SETUP_METHOD: (&str, &str) = ("attach", "()Z");

/// Descriptor of the platform's two-argument stop callback
pub const PLATFORM_STOP_DESCRIPTOR: &str = "(Ljava/lang/String;Z)V";

/// Exported symbols for [`DEFAULT_BRIDGE_CLASS`]
pub static DEFAULT_TABLE: Lazy<EntryPointTable> =
    Lazy::new(|| EntryPointTable::build(DEFAULT_BRIDGE_CLASS));

/// The five native notifiers of the listener class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    Init,
    Start,
    StopRelay,
    Done,
    Error,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 5] = [
        EntryPoint::Init,
        EntryPoint::Start,
        EntryPoint::StopRelay,
        EntryPoint::Done,
        EntryPoint::Error,
    ];

    /// Java method name declared `native` on the listener class
    pub fn method_name(self) -> &'static str {
        match self {
            EntryPoint::Init => "onInit",
            EntryPoint::Start => "onStart",
            EntryPoint::StopRelay => "nativeOnStop",
            EntryPoint::Done => "onDone",
            EntryPoint::Error => "onError",
        }
    }

    /// JNI method descriptor
    pub fn descriptor(self) -> &'static str {
        match self {
            EntryPoint::Init => "(I)V",
            _ => "(Ljava/lang/String;)V",
        }
    }

    /// True for the stop relay, which this crate exports itself and
    /// forwards to the library's one-argument `onStop`
    pub fn is_relay(self) -> bool {
        self == EntryPoint::StopRelay
    }

    fn index(self) -> usize {
        match self {
            EntryPoint::Init => 0,
            EntryPoint::Start => 1,
            EntryPoint::StopRelay => 2,
            EntryPoint::Done => 3,
            EntryPoint::Error => 4,
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.method_name(), self.descriptor())
    }
}

/// Exported symbol names for one listener class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointTable {
    class: String,
    symbols: [String; 5],
}

impl EntryPointTable {
    /// Build the table for a class given as `a.b.C` or `a/b/C`
    pub fn for_class(class: &str) -> Result<Self> {
        validate_class_name(class)?;
        Ok(Self::build(class))
    }

    fn build(class: &str) -> Self {
        let symbols = EntryPoint::ALL.map(|ep| short_name(class, ep.method_name()));
        Self {
            class: class.replace('/', "."),
            symbols,
        }
    }

    /// Class name in dotted form
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn symbol(&self, entry_point: EntryPoint) -> &str {
        &self.symbols[entry_point.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryPoint, &str)> {
        EntryPoint::ALL.into_iter().map(move |ep| (ep, self.symbol(ep)))
    }

    /// Whether `name` is one of the exported symbols
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.iter().any(|s| s == name)
    }
}

impl Default for EntryPointTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

/// Escape a class or method name for use in a JNI symbol
pub fn mangle(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' => out.push(ch),
            '/' => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("_0{:04x}", unit));
                }
            }
        }
    }
    out
}

/// `Java_<class>_<method>`
pub fn short_name(class: &str, method: &str) -> String {
    format!(
        "Java_{}_{}",
        mangle(&class.replace('.', "/")),
        mangle(method)
    )
}

/// Short name plus `__<mangled argument signature>`, used for overloads
pub fn long_name(class: &str, method: &str, descriptor: &str) -> Result<String> {
    let args = descriptor
        .strip_prefix('(')
        .and_then(|rest| rest.split_once(')'))
        .map(|(args, _ret)| args)
        .ok_or_else(|| BridgeError::Other(format!("Malformed method descriptor: {:?}", descriptor)))?;

    Ok(format!("{}__{}", short_name(class, method), mangle(args)))
}

/// Symbol a native `onStop(String, boolean)` would need on `class`
///
/// Nothing exports it; the relay through `nativeOnStop` exists instead.
pub fn platform_stop_symbol(class: &str) -> Result<String> {
    validate_class_name(class)?;
    long_name(class, "onStop", PLATFORM_STOP_DESCRIPTOR)
}

/// Reject names the JVM could never load
pub fn validate_class_name(class: &str) -> Result<()> {
    let invalid = || BridgeError::InvalidClassName(class.to_string());

    if class.is_empty() {
        return Err(invalid());
    }

    for segment in class.split(['.', '/']) {
        let first = segment.chars().next().ok_or_else(invalid)?;
        if first.is_ascii_digit() {
            return Err(invalid());
        }
        if segment
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ';' | '[' | '(' | ')'))
        {
            return Err(invalid());
        }
    }

    Ok(())
}
