use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed input line: {0}")]
    MalformedLine(String),

    #[error("Handshake rejected: {0}")]
    HandshakeRejected(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Record {rule} failed: {reason}")]
    HandlerFailed { rule: String, reason: String },

    #[error("Can't find records dir {0}")]
    RecordsDirMissing(String),

    #[error("Invalid record file {path}: {reason}")]
    RecordFile { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),
}

/// Failure reported by a resolution rule's answer logic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("no answer available")]
    NotFound,

    #[error("{0}")]
    Failed(String),
}
