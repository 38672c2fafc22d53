use serde::{Deserialize, Serialize};

use super::backend::BackendConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordsConfig;
use super::soa::SoaConfig;

const LOCAL_CONFIG_PATH: &str = "pipe-backend.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/pdns/pipe-backend.toml";

/// Main configuration structure for the pipe backend
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Handshake banner
    #[serde(default)]
    pub backend: BackendConfig,

    /// Record directory and reload cadence
    #[serde(default)]
    pub records: RecordsConfig,

    /// Synthesized SOA values
    #[serde(default)]
    pub soa: SoaConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pipe-backend.toml in current directory
    /// 3. /etc/pdns/pipe-backend.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.records_dir {
            self.records.dir = dir;
        }
        if let Some(interval) = overrides.reload_interval {
            self.records.reload_interval = interval;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.records.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "records.dir cannot be empty".to_string(),
            ));
        }

        if self.records.reload_interval == 0 {
            return Err(ConfigError::Validation(
                "records.reload_interval must be greater than 0".to_string(),
            ));
        }

        if self.soa.contact.trim().is_empty() || self.soa.nameserver.trim().is_empty() {
            return Err(ConfigError::Validation(
                "soa.contact and soa.nameserver must be set".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<&'static str> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub records_dir: Option<String>,
    pub reload_interval: Option<u64>,
    pub log_level: Option<String>,
}
