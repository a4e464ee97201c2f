//! Configuration management

use crate::symbols::DEFAULT_BRIDGE_CLASS;
use crate::{BridgeError, Result};
use ini::Ini;
use log::{debug, info, LevelFilter};
use std::path::{Path, PathBuf};

/// Config file name inside the platform config directory
pub const CONFIG_FILE: &str = "tts-bridge.cfg";

/// Bridge configuration
///
/// ```ini
/// [bridge]
/// class = rs.tts.Bridge
/// log_interrupted = true
///
/// [logging]
/// level = info
/// tag = rs.tts.Bridge
/// ```
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Where the config was loaded from, if anywhere
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the user config directory, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`, writing the defaults there if missing
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| BridgeError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| BridgeError::Config(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self {
            ini,
            path: Some(path),
        })
    }

    /// Save configuration to the file it came from
    pub fn save(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| BridgeError::Config("Config has no file path".to_string()))?;
        debug!("Saving config to {:?}", path);
        self.ini
            .write_to_file(path)
            .map_err(|e| BridgeError::Config(format!("Failed to save config: {}", e)))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("bridge"))
            .set("class", DEFAULT_BRIDGE_CLASS)
            .set("log_interrupted", "true");

        ini.with_section(Some("logging"))
            .set("level", "info")
            .set("tag", DEFAULT_BRIDGE_CLASS);

        ini
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Java listener class whose native methods the library exports
    pub fn class_name(&self) -> String {
        self.get_string("bridge", "class", DEFAULT_BRIDGE_CLASS)
    }

    /// Log the interrupted flag on stop before dropping it
    pub fn log_interrupted(&self) -> bool {
        self.get_bool("bridge", "log_interrupted", true)
    }

    /// Default log level; unknown names fall back to info
    pub fn log_level(&self) -> LevelFilter {
        self.get_string("logging", "level", "info")
            .trim()
            .parse()
            .unwrap_or(LevelFilter::Info)
    }

    /// Android log tag
    pub fn log_tag(&self) -> String {
        self.get_string("logging", "tag", DEFAULT_BRIDGE_CLASS)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ini: Self::default_config(),
            path: None,
        }
    }
}
