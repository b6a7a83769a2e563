// Standard library
use std::io;
use std::time::Duration;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("The target host must not be empty")]
    EmptyHost,
    #[error("Invalid target host '{0}': only printable ASCII without whitespace is allowed")]
    InvalidHost(String),
    #[error("Invalid target port {0}: must be between 1 and 65535")]
    InvalidPort(u16),
}

/// Failure while establishing the connection.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Could not resolve {host}: {source}")]
    Resolve { host: String, source: io::Error },

    #[error("{host} did not resolve to any address")]
    NoAddress { host: String },

    #[error("Connection attempt timed out after {} ms", .0.as_millis())]
    TimedOut(Duration),

    #[error("{0}")]
    Io(#[from] io::Error),
}

impl ConnectError {
    /// Whether this failure means the service could not be reached, as opposed
    /// to a local fault while trying.
    pub fn is_connection_level(&self) -> bool {
        match self {
            ConnectError::Resolve { .. } | ConnectError::NoAddress { .. } => true,
            ConnectError::TimedOut(_) => true,
            ConnectError::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::NotConnected
                    | io::ErrorKind::AddrNotAvailable
                    | io::ErrorKind::TimedOut
                    | io::ErrorKind::HostUnreachable
                    | io::ErrorKind::NetworkUnreachable
                    | io::ErrorKind::NetworkDown
            ),
        }
    }
}

/// Failure while talking over an established connection.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Failed to send the data: {0}")]
    Send(#[source] io::Error),

    #[error("Failed to send the closing byte: {0}")]
    SendBody(#[source] io::Error),

    #[error("Failed to close the socket: {0}")]
    Close(#[source] io::Error),
}

impl ExchangeError {
    /// The underlying I/O error, for transcript lines.
    pub fn cause(&self) -> &io::Error {
        match self {
            ExchangeError::Send(e) | ExchangeError::SendBody(e) | ExchangeError::Close(e) => e,
        }
    }
}
