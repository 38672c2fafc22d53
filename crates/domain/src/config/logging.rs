use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; standard error when unset
    #[serde(default)]
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Maps the configured level name onto a tracing filter.
    ///
    /// `fatal` has no tracing counterpart and maps to `error`. Unknown names
    /// fall back to `info`; the returned message is meant to be logged once
    /// the subscriber is installed.
    pub fn level_filter(&self) -> (LevelFilter, Option<String>) {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" => (LevelFilter::TRACE, None),
            "debug" => (LevelFilter::DEBUG, None),
            "info" => (LevelFilter::INFO, None),
            "warn" => (LevelFilter::WARN, None),
            "error" | "fatal" => (LevelFilter::ERROR, None),
            other => (
                LevelFilter::INFO,
                Some(format!("Invalid log level {}, defaulting to info", other)),
            ),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
