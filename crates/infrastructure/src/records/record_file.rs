use pipe_backend_domain::{RecordKind, DEFAULT_TTL};
use serde::Deserialize;

/// On-disk form of a `.prb` record file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordFile {
    #[serde(default, rename = "record")]
    pub records: Vec<RecordEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordEntry {
    /// Exact name this record answers for
    #[serde(default)]
    pub name: Option<String>,

    /// Several exact names sharing one answer
    #[serde(default)]
    pub names: Vec<String>,

    /// Any name ending in this suffix
    #[serde(default)]
    pub suffix: Option<String>,

    /// Regular expression over the query name
    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub kind: RecordKind,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub answers: Vec<AnswerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerEntry {
    #[serde(rename = "type")]
    pub qtype: String,

    pub content: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl RecordFile {
    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}
