use serde::{Deserialize, Serialize};

/// Values used when synthesizing SOA answers for record rules.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoaConfig {
    #[serde(default = "default_contact")]
    pub contact: String,

    #[serde(default = "default_nameserver")]
    pub nameserver: String,
}

impl Default for SoaConfig {
    fn default() -> Self {
        Self {
            contact: default_contact(),
            nameserver: default_nameserver(),
        }
    }
}

fn default_contact() -> String {
    "hostmaster.example.net".to_string()
}

fn default_nameserver() -> String {
    "ns1.example.net".to_string()
}
