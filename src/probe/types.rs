// Standard library
use std::time::Duration;

/// Host and port of the Registrar service to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub(super) host: String,
    pub(super) port: u16,
}

/// Hand-built request that declares a one byte body but carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub(super) bytes: Vec<u8>,
}

/// Final determination of a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The Registrar answered with the interim `100 Continue` status line
    Healthy,
    /// Connected, but the response window did not carry the marker
    Unhealthy,
    /// The socket could not be established
    ConnectionFailed,
    /// A local fault stopped the probe before it could classify a response
    UnexpectedError,
}

/// How the read of the response window ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiveStatus {
    /// All 21 bytes arrived
    Complete,
    /// The peer closed the connection before the window was full
    Closed,
    /// The receive timeout elapsed before the window was full
    TimedOut(Duration),
    /// The read failed with an I/O error
    Failed(String),
}

/// Bytes captured from the response window and how the read ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseWindow {
    pub bytes: Vec<u8>,
    pub status: ReceiveStatus,
}

/// Ordered diagnostic lines produced during a probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub(super) lines: Vec<String>,
}

/// Everything a single probe produced.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub target: Target,
    pub outcome: ProbeOutcome,
    pub transcript: Transcript,
    pub response: Option<ResponseWindow>,
}

/// Runs single-shot probes against a Registrar.
#[derive(Debug, Clone)]
pub struct ProbeRunner {
    pub(super) connect_timeout: Duration,
    pub(super) receive_timeout: Duration,
}
