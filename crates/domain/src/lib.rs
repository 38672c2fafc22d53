//! Pipe backend domain layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod pipe_request;
pub mod query_class;
pub mod query_type;

pub use answer::{Answer, AnswerRecord, RecordKind, DEFAULT_TTL};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{DomainError, RuleError};
pub use pipe_request::PipeRequest;
pub use query_class::QueryClass;
pub use query_type::QueryType;
