use crate::ports::ResolutionRule;
use pipe_backend_domain::{Answer, PipeRequest, RecordKind, RuleError};

type Matcher = dyn Fn(&PipeRequest) -> bool + Send + Sync;
type Handler = dyn Fn(&PipeRequest) -> Result<Answer, RuleError> + Send + Sync;

/// Rule assembled from closures, for rules compiled into the binary.
pub struct FnRule {
    name: String,
    kind: RecordKind,
    matcher: Box<Matcher>,
    handler: Box<Handler>,
}

impl FnRule {
    pub fn new<M, H>(name: impl Into<String>, matcher: M, handler: H) -> Self
    where
        M: Fn(&PipeRequest) -> bool + Send + Sync + 'static,
        H: Fn(&PipeRequest) -> Result<Answer, RuleError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: RecordKind::Record,
            matcher: Box::new(matcher),
            handler: Box::new(handler),
        }
    }

    /// Rule answering for exactly one name, compared case-insensitively.
    pub fn for_name<H>(qname: &str, handler: H) -> Self
    where
        H: Fn(&PipeRequest) -> Result<Answer, RuleError> + Send + Sync + 'static,
    {
        let wanted = qname.trim_end_matches('.').to_ascii_lowercase();
        Self::new(
            qname,
            move |request| request.qname.trim_end_matches('.').eq_ignore_ascii_case(&wanted),
            handler,
        )
    }

    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = kind;
        self
    }
}

impl ResolutionRule for FnRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RecordKind {
        self.kind
    }

    fn matches(&self, request: &PipeRequest) -> bool {
        (self.matcher)(request)
    }

    fn answer(&self, request: &PipeRequest) -> Result<Answer, RuleError> {
        (self.handler)(request)
    }
}
