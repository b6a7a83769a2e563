//! Command line handling: turns the arguments into a validated [`Target`].
//!
//! [`Target`]: crate::probe::Target

pub mod constants;
pub mod errors;
pub mod functions;
pub mod types;

pub use constants::USAGE_EXIT_CODE;
pub use errors::UsageError;
pub use functions::parse_args;
