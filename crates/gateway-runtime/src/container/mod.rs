//! # Runtime Container
//!
//! Configuration for the gateway core, storage and logging.

pub mod config;

pub use config::{ConfigError, LoggingConfig, RuntimeConfig, StorageConfig};
