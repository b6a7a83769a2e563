// 3rd party crates
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "xdping")]
#[command(version)]
#[command(
    about = "Checks that a Delivery Controller or Cloud Connector's Broker Registrar service is listening and healthy"
)]
pub struct Cli {
    /// Delivery Controller or Cloud Connector to probe
    #[arg(
        short = 'd',
        long = "deliverycontroller",
        visible_alias = "host",
        value_name = "HOST"
    )]
    pub delivery_controller: Option<String>,

    /// Port the Broker's Registrar service listens on [default: 80]
    #[arg(
        short = 'p',
        long,
        value_name = "PORT",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: Option<u16>,
}
