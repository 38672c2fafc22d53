use pipe_backend_domain::{Answer, PipeRequest, RecordKind, RuleError};

/// A named predicate and handler pair answering one class of query.
///
/// Rules are owned by the registry and replaced wholesale on reload, so
/// implementations hold no per-request state.
pub trait ResolutionRule: Send + Sync {
    fn name(&self) -> &str;

    fn kind(&self) -> RecordKind {
        RecordKind::Record
    }

    fn matches(&self, request: &PipeRequest) -> bool;

    fn answer(&self, request: &PipeRequest) -> Result<Answer, RuleError>;
}
