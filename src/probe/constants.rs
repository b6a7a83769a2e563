// Standard library
use std::time::Duration;

/// Path of the Broker's Registrar service endpoint
pub const REGISTRAR_PATH: &str = "/Citrix/CdsController/IRegistrar";

/// Port the Registrar listens on when none is configured
pub const DEFAULT_PORT: u16 = 80;

/// Width of the response window, sized to the interim status line
pub const RESPONSE_WINDOW: usize = 21;

/// Status line that marks a healthy Registrar
pub const CONTINUE_MARKER: &str = "HTTP/1.1 100 Continue";

/// Single body byte (ASCII space) sent after the window is read
pub const BODY_BYTE: u8 = 32;

/// Default timeouts
pub const DEFAULT_RECEIVE_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;

pub fn default_port() -> u16 {
    DEFAULT_PORT
}

pub fn default_receive_timeout_ms() -> u64 {
    DEFAULT_RECEIVE_TIMEOUT_MS
}

pub fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

pub fn default_receive_timeout() -> Duration {
    Duration::from_millis(DEFAULT_RECEIVE_TIMEOUT_MS)
}

pub fn default_connect_timeout() -> Duration {
    Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS)
}
