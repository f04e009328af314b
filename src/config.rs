//! # Bridge Configuration
//!
//! Configuration management for the bridge library and CLI.
//! Supports environment variables, config files, and command-line overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{DEFAULT_BROKER_ADDRESS, DEFAULT_TOPIC};
use crate::error::{BridgeError, BridgeResult};

/// Bridge configuration, mirroring the `zeebe.broker.*` option keys
///
/// # Examples
///
/// ```rust
/// use zeebe_bridge::BridgeConfig;
///
/// let config = BridgeConfig::default();
/// assert_eq!(config.broker_address(), "127.0.0.1:26500");
/// assert_eq!(config.default_topic(), "default-topic");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// The `[zeebe]` configuration table
    pub zeebe: ZeebeConfig,
}

/// The `[zeebe]` table; only broker settings are recognized
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ZeebeConfig {
    /// Broker connection settings
    pub broker: BrokerConfig,
}

/// Broker connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Broker network address (e.g. "127.0.0.1:26500")
    pub address: String,
    /// Topic commands are executed against
    #[serde(rename = "defaulttopic")]
    pub default_topic: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_BROKER_ADDRESS.to_string(),
            default_topic: DEFAULT_TOPIC.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file named by `ZBC_CONFIG`
    /// 3. Discovered config file
    /// 4. Default values
    pub fn load() -> BridgeResult<Self> {
        // A path named explicitly via ZBC_CONFIG must be readable; a merely
        // discovered file may fail and fall back to defaults.
        if let Ok(path) = std::env::var("ZBC_CONFIG") {
            debug!("Loading config from ZBC_CONFIG: {path}");
            let mut config = Self::load_from_file(Path::new(&path))?;
            config.apply_env_overrides();
            return Ok(config);
        }

        let mut config = Self::default();
        if let Some(config_path) = Self::find_config_file() {
            debug!("Loading config from: {}", config_path.display());
            match Self::load_from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => {
                    debug!("Failed to load config file: {e}");
                    // Continue with defaults if the discovered file fails
                }
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> BridgeResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::config_error(format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| BridgeError::config_error(format!("Failed to parse config file: {e}")))?;

        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut candidates = vec![
            PathBuf::from("./zeebe-bridge.toml"),
            PathBuf::from("./config/zeebe-bridge.toml"),
        ];
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".zeebe").join("config.toml"));
        }
        candidates.push(PathBuf::from("/etc/zeebe/config.toml"));

        candidates.into_iter().find(|path| path.is_file())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(address) = std::env::var("ZB_BROKER_ADDRESS") {
            self.zeebe.broker.address = address;
        }
        if let Ok(topic) = std::env::var("ZB_TOPIC_NAME") {
            self.zeebe.broker.default_topic = topic;
        }
    }

    /// Broker network address
    pub fn broker_address(&self) -> &str {
        &self.zeebe.broker.address
    }

    /// Topic commands are executed against
    pub fn default_topic(&self) -> &str {
        &self.zeebe.broker.default_topic
    }
}
