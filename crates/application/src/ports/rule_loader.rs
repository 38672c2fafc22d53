use super::ResolutionRule;
use async_trait::async_trait;
use pipe_backend_domain::DomainError;
use std::sync::Arc;

/// Source of the complete rule set, in registration order.
#[async_trait]
pub trait RuleLoader: Send + Sync {
    async fn load(&self) -> Result<Vec<Arc<dyn ResolutionRule>>, DomainError>;

    /// Human readable origin of the rules, for logs.
    fn source(&self) -> String;
}
