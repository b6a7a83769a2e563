//! Registrar health probe ("XDPing").
//!
//! Opens a raw TCP connection to a Delivery Controller or Cloud Connector and
//! posts a request to the Broker's Registrar service that declares
//! `Content-Length: 1` and `Expect: 100-continue` but carries no body. A
//! healthy Registrar answers with the interim `HTTP/1.1 100 Continue` status
//! line, which is exactly 21 bytes long. The probe reads that window, completes
//! the body with a single space and classifies the service from the bytes it
//! captured.
//!
//! Every step narrates itself into a [`Transcript`] so the result can be
//! printed as-is for troubleshooting.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

pub use errors::{ConnectError, ExchangeError, TargetError};
pub use types::{
    ProbeOutcome, ProbeRequest, ProbeResult, ProbeRunner, ReceiveStatus, ResponseWindow, Target,
    Transcript,
};
