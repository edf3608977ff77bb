//! # Runtime Configuration
//!
//! Defaults for every field, with environment overrides:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `GATEWAY_CHAIN` | `gateway.chain` (e.g. `ETH`) |
//! | `GATEWAY_MAX_SIGNATURES` | `gateway.max_signatures` |
//! | `GATEWAY_DATA_DIR` | `storage.data_dir` |
//! | `GATEWAY_LOG` | `logging.filter` (EnvFilter syntax) |
//!
//! A malformed override is an error, never silently ignored.

use custody_gateway::GatewayConfig;
use shared_types::ChainId;
use std::path::PathBuf;
use thiserror::Error;

/// Chain override.
pub const ENV_CHAIN: &str = "GATEWAY_CHAIN";
/// Signature cap override.
pub const ENV_MAX_SIGNATURES: &str = "GATEWAY_MAX_SIGNATURES";
/// Data directory override.
pub const ENV_DATA_DIR: &str = "GATEWAY_DATA_DIR";
/// Log filter override.
pub const ENV_LOG: &str = "GATEWAY_LOG";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An override could not be parsed.
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// What was wrong with it
        reason: String,
    },

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Gateway core configuration.
    pub gateway: GatewayConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl RuntimeConfig {
    /// Defaults overlaid with process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay values from `lookup` (an environment-like source).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_CHAIN) {
            self.gateway.chain = value
                .parse::<ChainId>()
                .map_err(|e| invalid(ENV_CHAIN, &value, e.to_string()))?;
        }

        if let Some(value) = lookup(ENV_MAX_SIGNATURES) {
            let max = value
                .parse::<usize>()
                .map_err(|e| invalid(ENV_MAX_SIGNATURES, &value, e.to_string()))?;
            if max == 0 {
                return Err(invalid(ENV_MAX_SIGNATURES, &value, "must be positive".into()));
            }
            self.gateway.max_signatures = max;
        }

        if let Some(value) = lookup(ENV_DATA_DIR) {
            if value.trim().is_empty() {
                return Err(invalid(ENV_DATA_DIR, &value, "must not be empty".into()));
            }
            self.storage.data_dir = PathBuf::from(value);
        }

        if let Some(value) = lookup(ENV_LOG) {
            self.logging.filter = value;
        }

        Ok(())
    }
}

fn invalid(key: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason,
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the snapshot and its lock file.
    pub data_dir: PathBuf,
    /// Snapshot file name inside `data_dir`.
    pub snapshot_file: String,
}

impl StorageConfig {
    /// Full snapshot path.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            snapshot_file: "gateway.snapshot".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Include the event target in output.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            with_target: true,
        }
    }
}
