// Standard library
use std::ffi::OsString;

// 3rd party crates
use clap::Parser;
use tracing::debug;

// Project imports
use crate::probe::Target;
use crate::settings::ProbeSettings;

// Current module imports
use super::constants::FLAG_NAMES;
use super::errors::UsageError;
use super::types::Cli;

/// Rewrites `-port`, `/Port`, `--PORT` and friends to the `--port` form clap
/// expects. Anything else passes through untouched.
pub fn normalize_arg(arg: OsString) -> OsString {
    let normalized: Option<OsString> = arg.to_str().and_then(|text| {
        let name: &str = text
            .strip_prefix("--")
            .or_else(|| text.strip_prefix('-'))
            .or_else(|| text.strip_prefix('/'))?;

        FLAG_NAMES
            .iter()
            .find(|flag| flag.eq_ignore_ascii_case(name))
            .map(|flag| OsString::from(format!("--{}", flag)))
    });

    normalized.unwrap_or(arg)
}

/// Parses the full argument list (program name first) into a probe target.
///
/// The port falls back to `defaults.port` when the command line has none.
pub fn parse_args<I, T>(args: I, defaults: &ProbeSettings) -> Result<Target, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args
        .into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            let arg: OsString = arg.into();
            if idx == 0 {
                arg
            } else {
                normalize_arg(arg)
            }
        })
        .collect();

    let cli: Cli = Cli::try_parse_from(args)?;
    debug!(?cli, "Parsed command line");

    let host: String = cli
        .delivery_controller
        .filter(|host| !host.is_empty())
        .ok_or(UsageError::MissingTarget)?;
    let port: u16 = cli.port.unwrap_or(defaults.port);

    Ok(Target::new(host, port)?)
}
