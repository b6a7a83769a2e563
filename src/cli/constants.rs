/// Exit code for a missing or invalid invocation; the probe never ran.
pub const USAGE_EXIT_CODE: i32 = -1;

/// Flags that may also be spelled `-name` or `/name`, in any case.
pub const FLAG_NAMES: [&str; 2] = ["deliverycontroller", "port"];

pub const USAGE: &str = "\
Valid command line arguments must be supplied:
-deliverycontroller, --deliverycontroller or /deliverycontroller is a required flag. This must be followed by the name of a Delivery Controller or Cloud Connector.
-port, --port or /port is an optional flag. It will default to 80 if not supplied. This is the port the Broker's Registrar service listens on.";
