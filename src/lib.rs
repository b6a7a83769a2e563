//! XDPing: health probe for the Citrix Broker Registrar service.
//!
//! The [`probe`] module holds the probe itself. [`settings`] and [`cli`] turn
//! configuration and the command line into a [`probe::Target`] and the
//! timeouts a [`probe::ProbeRunner`] uses.

pub mod cli;
pub mod probe;
pub mod settings;
