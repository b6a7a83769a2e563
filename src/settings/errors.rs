// Standard library
use std::path::PathBuf;

// 3rd party crates
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Probe port must be between 1 and 65535, got {0}")]
    InvalidPort(u16),
    #[error("Receive timeout must be greater than 0 ms, got {0}")]
    InvalidReceiveTimeout(u64),
    #[error("Connect timeout must be greater than 0 ms, got {0}")]
    InvalidConnectTimeout(u64),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration file path contains invalid UTF-8 characters: {0:?}")]
    InvalidPath(PathBuf),
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}
