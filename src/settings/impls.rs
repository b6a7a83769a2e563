// Standard library
use std::env;
use std::path::{Path, PathBuf};

// 3rd party crates
use config::{Config, Environment, File};
use tracing::debug;

// Project imports
use crate::probe::constants::{
    default_connect_timeout_ms, default_port, default_receive_timeout_ms,
};

// Current module imports
use super::constants::{
    default_log_level, CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, ENV_PREFIX,
    ENV_SEPARATOR, LOG_LEVELS,
};
use super::errors::{SettingsError, ValidationError};
use super::types::{Log, ProbeSettings, Settings, ValidatedSettings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            receive_timeout_ms: default_receive_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl Settings {
    /// Loads settings from the default location and the environment.
    pub fn load() -> Result<ValidatedSettings, SettingsError> {
        let config_path: Option<PathBuf> = Self::get_config_path();
        Self::load_from(config_path.as_deref())
    }

    /// Loads settings from an optional file plus `XDPING__*` environment
    /// variables and validates them. A missing file is not an error.
    pub fn load_from(config_path: Option<&Path>) -> Result<ValidatedSettings, SettingsError> {
        let settings: Settings = Self::load_settings(config_path)?;

        // Runs before logging is set up, so the error is returned, not logged.
        ValidatedSettings::new(settings).map_err(SettingsError::Validation)
    }

    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !LOG_LEVELS.contains(&self.get_log_level().as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.log.level.clone()));
        }

        if self.probe.port == 0 {
            return Err(ValidationError::InvalidPort(self.probe.port));
        }

        if self.probe.receive_timeout_ms == 0 {
            return Err(ValidationError::InvalidReceiveTimeout(
                self.probe.receive_timeout_ms,
            ));
        }

        if self.probe.connect_timeout_ms == 0 {
            return Err(ValidationError::InvalidConnectTimeout(
                self.probe.connect_timeout_ms,
            ));
        }

        Ok(())
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Some(PathBuf::from(path))
        } else {
            dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        }
    }

    fn load_settings(config_path: Option<&Path>) -> Result<Settings, SettingsError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            let config_file: &str = path
                .to_str()
                .ok_or_else(|| SettingsError::InvalidPath(path.to_path_buf()))?;
            debug!("Reading configuration from {:?}", path);
            builder = builder.add_source(File::with_name(config_file).required(false));
        }

        let settings: Config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
