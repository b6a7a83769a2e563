/// Environment variable that points at the settings file
pub const CONFIG_PATH_ENV: &str = "XDPING_CONFIG_PATH";

/// Directory and file name under the user's configuration directory
pub const CONFIG_DIR_NAME: &str = "xdping";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix and separator for environment overrides, e.g. `XDPING__LOG__LEVEL`
pub const ENV_PREFIX: &str = "XDPING";
pub const ENV_SEPARATOR: &str = "__";

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

pub fn default_log_level() -> String {
    "warn".to_string()
}
