// Standard library
use std::io::{self, Write};
use std::process;

// 3rd party crates
use clap::error::ErrorKind;
use thiserror::Error;

// Project imports
use crate::probe::TargetError;

// Current module imports
use super::constants::{USAGE, USAGE_EXIT_CODE};

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("No Delivery Controller or Cloud Connector was supplied")]
    MissingTarget,
    #[error("{0}")]
    InvalidTarget(#[from] TargetError),
    #[error("{0}")]
    Arguments(#[from] clap::Error),
}

fn is_informational_kind(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

impl UsageError {
    /// `--help` and `--version` surface as errors from clap but are not failures.
    pub fn is_informational(&self) -> bool {
        match self {
            UsageError::Arguments(e) => is_informational_kind(e.kind()),
            _ => false,
        }
    }

    /// Writes the reason to `err` and the guidance text to `out`.
    pub fn report<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        writeln!(err, "{}", self)?;
        writeln!(out, "{}", USAGE)?;
        out.flush()
    }

    /// Prints the error and terminates the process. Help and version output
    /// exit with 0, everything else prints the usage text to stdout and exits
    /// with [`USAGE_EXIT_CODE`].
    pub fn exit(self) -> ! {
        match self {
            UsageError::Arguments(e) if is_informational_kind(e.kind()) => e.exit(),
            other => {
                // Nothing left to report to if stdout or stderr is gone.
                let _ = other.report(&mut io::stdout().lock(), &mut io::stderr().lock());
                process::exit(USAGE_EXIT_CODE)
            }
        }
    }
}
