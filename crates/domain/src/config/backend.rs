use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Text sent after `OK` when the handshake succeeds
    #[serde(default = "default_banner")]
    pub banner: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
        }
    }
}

fn default_banner() -> String {
    "Rust pipe backend starting".to_string()
}
