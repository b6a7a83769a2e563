// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::probe::constants::{
    default_connect_timeout_ms, default_port, default_receive_timeout_ms,
};

// Current module imports
use super::constants::default_log_level;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Registrar port used when the command line does not name one
    #[serde(default = "default_port")]
    pub port: u16,
    /// Time allowed for the 21 byte response window, in milliseconds
    #[serde(default = "default_receive_timeout_ms")]
    pub receive_timeout_ms: u64,
    /// Time allowed for name resolution and the TCP handshake, in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub probe: ProbeSettings,
}

/// Settings that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);
