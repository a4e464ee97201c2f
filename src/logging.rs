//! Logger setup
//!
//! Hosts log through `env_logger` (`RUST_LOG` overrides the configured
//! level); Android logs through logcat with the configured tag.

use crate::config::Config;
use log::LevelFilter;

/// Initialize logging from `config`. Later calls are no-ops.
pub fn init_logging(config: &Config) {
    init_with_level(config.log_level(), &config.log_tag());
}

#[cfg(not(target_os = "android"))]
pub fn init_with_level(level: LevelFilter, _tag: &str) {
    // try_init fails when a logger is already installed; that is fine.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

#[cfg(target_os = "android")]
pub fn init_with_level(level: LevelFilter, tag: &str) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(tag),
    );
}
