use crate::ports::ResolutionRule;
use arc_swap::ArcSwap;
use pipe_backend_domain::{Answer, DomainError, PipeRequest, RuleError};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

type RuleSet = Vec<Arc<dyn ResolutionRule>>;

/// Ordered set of resolution rules.
///
/// Readers always observe either the complete previous set or the complete
/// replacement: reloads build the new set off to the side and swap it in.
pub struct ResolverRegistry {
    rules: ArcSwap<RuleSet>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self {
            rules: ArcSwap::from_pointee(Vec::new()),
        }
    }

    pub fn clear(&self) {
        self.rules.store(Arc::new(Vec::new()));
    }

    /// Appends a rule; earlier registrations take precedence.
    pub fn register(&self, rule: Arc<dyn ResolutionRule>) {
        self.rules.rcu(|current| {
            let mut next: RuleSet = Vec::clone(current);
            next.push(Arc::clone(&rule));
            next
        });
    }

    /// Swaps in a complete rule set in one step.
    pub fn replace_all(&self, rules: RuleSet) {
        self.rules.store(Arc::new(rules));
    }

    pub fn first_match(&self, request: &PipeRequest) -> Option<Arc<dyn ResolutionRule>> {
        self.rules
            .load()
            .iter()
            .find(|rule| rule.matches(request))
            .cloned()
    }

    /// Runs a rule's answer logic. Nothing raised inside the rule, panics
    /// included, escapes this call.
    pub fn dispatch(
        &self,
        rule: &Arc<dyn ResolutionRule>,
        request: &PipeRequest,
    ) -> Result<Answer, DomainError> {
        match panic::catch_unwind(AssertUnwindSafe(|| rule.answer(request))) {
            Ok(Ok(answer)) => Ok(answer),
            Ok(Err(RuleError::NotFound)) => {
                Err(DomainError::RecordNotFound(request.qname.to_string()))
            }
            Ok(Err(RuleError::Failed(reason))) => Err(DomainError::HandlerFailed {
                rule: rule.name().to_string(),
                reason,
            }),
            Err(payload) => Err(DomainError::HandlerFailed {
                rule: rule.name().to_string(),
                reason: panic_reason(payload.as_ref()),
            }),
        }
    }

    /// Looks up and dispatches in one go; an unmatched name is reported as
    /// not found.
    pub fn resolve(&self, request: &PipeRequest) -> Result<Answer, DomainError> {
        let rule = self
            .first_match(request)
            .ok_or_else(|| DomainError::RecordNotFound(request.qname.to_string()))?;
        self.dispatch(&rule, request)
    }

    pub fn len(&self) -> usize {
        self.rules.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.load().is_empty()
    }

    pub fn rule_names(&self) -> Vec<String> {
        self.rules
            .load()
            .iter()
            .map(|rule| rule.name().to_string())
            .collect()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked".to_string()
    }
}
