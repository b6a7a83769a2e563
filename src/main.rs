// Standard library
use std::process;

// 3rd party crates
use tracing::{error, info, warn};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use xdping::cli::{self, USAGE_EXIT_CODE};
use xdping::probe::{ProbeResult, ProbeRunner, Target};
use xdping::settings::{Settings, ValidatedSettings};

/// Main entry point for XDPing.
/// Checks whether the Broker's Registrar service on a Delivery Controller or
/// Cloud Connector is reachable, listening and processing requests.
///
/// The transcript of the probe is printed to stdout. The exit code is `-1` when
/// the command line or configuration is unusable and `0` once a probe ran,
/// whatever its verdict.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let settings: ValidatedSettings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(USAGE_EXIT_CODE);
        }
    };

    init_logging(&settings);
    info!("Settings have been loaded.");

    let target: Target = match cli::parse_args(std::env::args_os(), &settings.probe) {
        Ok(target) => target,
        Err(e) => {
            if !e.is_informational() {
                error!("Invalid invocation: {}", e);
            }
            e.exit()
        }
    };

    let runner: ProbeRunner = ProbeRunner::from_settings(&settings.probe);
    let result: ProbeResult = runner.probe(&target).await;

    if result.is_healthy() {
        info!("{} is listening and healthy", target);
    } else {
        warn!("{} is not healthy: {}", target, result.outcome);
    }

    println!("{}", result);
}

/// Sets up the `tracing` subscriber. Logs go to stderr so stdout carries only
/// the transcript.
fn init_logging(settings: &Settings) {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(settings.get_log_level());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
