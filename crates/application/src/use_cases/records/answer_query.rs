use crate::services::ResolverRegistry;
use pipe_backend_domain::config::SoaConfig;
use pipe_backend_domain::{DomainError, PipeRequest, RecordKind};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Result of one lookup exchange, before wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// No rule claims the name; answered with a bare terminator.
    Unknown,
    /// A rule matched but could not answer; answered with `FAIL`.
    Failed(DomainError),
    /// Data lines to emit before the terminator.
    Answered(Vec<String>),
}

pub struct AnswerQueryUseCase {
    registry: Arc<ResolverRegistry>,
    soa: SoaConfig,
}

impl AnswerQueryUseCase {
    pub fn new(registry: Arc<ResolverRegistry>, soa: SoaConfig) -> Self {
        Self { registry, soa }
    }

    pub fn execute(&self, request: &PipeRequest) -> QueryOutcome {
        let Some(rule) = self.registry.first_match(request) else {
            info!(qname = %request.qname, "Asked to serve record but don't know how");
            return QueryOutcome::Unknown;
        };

        info!(
            qname = %request.qname,
            qtype = %request.qtype,
            remote = %request.remote_ip,
            rule = rule.name(),
            "Handling lookup"
        );

        let answer = match self.registry.dispatch(&rule, request) {
            Ok(answer) => answer,
            Err(e) => {
                match &e {
                    DomainError::RecordNotFound(_) => {
                        error!(qname = %request.qname, "Could not serve request, record was not found")
                    }
                    DomainError::HandlerFailed { reason, .. } => {
                        error!(qname = %request.qname, error = %reason, "Could not serve request, record failed")
                    }
                    other => {
                        error!(qname = %request.qname, error = %other, "Unexpected error while serving request")
                    }
                }
                return QueryOutcome::Failed(e);
            }
        };

        let mut lines = Vec::with_capacity(answer.records().len() + 1);

        // Record rules carry no authority data of their own, so SOA and ANY
        // lookups get a synthesized SOA ahead of the data.
        if rule.kind() == RecordKind::Record && request.qtype.wants_soa() {
            let soa = answer.fudge_soa(&self.soa.contact, &self.soa.nameserver);
            debug!(line = %soa, "Fudged SOA");
            lines.push(soa);
        }

        if !request.is_soa() {
            lines.extend(answer.response());
        }

        QueryOutcome::Answered(lines)
    }
}
