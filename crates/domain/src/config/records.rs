use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    /// Directory scanned for record files
    #[serde(default = "default_records_dir")]
    pub dir: String,

    /// Seconds between reloads, counted from the end of the previous one
    #[serde(default = "default_reload_interval")]
    pub reload_interval: u64,
}

impl RecordsConfig {
    pub fn reload_interval(&self) -> Duration {
        Duration::from_secs(self.reload_interval)
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            dir: default_records_dir(),
            reload_interval: default_reload_interval(),
        }
    }
}

fn default_records_dir() -> String {
    "/etc/pdns/records".to_string()
}

fn default_reload_interval() -> u64 {
    60
}
