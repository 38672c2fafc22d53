#![allow(dead_code)]

use async_trait::async_trait;
use pipe_backend_application::ports::{ResolutionRule, RuleLoader};
use pipe_backend_application::services::{FnRule, ResolverRegistry};
use pipe_backend_application::use_cases::{AnswerQueryUseCase, ReloadRecordsUseCase};
use pipe_backend_domain::config::SoaConfig;
use pipe_backend_domain::{Answer, DomainError, QueryType, RuleError};
use pipe_backend_infrastructure::pipe::PipeSession;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const BANNER: &str = "Rust pipe backend starting";

/// Loader handing out the same rules on every call and counting the
/// calls. With `failing_after(n)` every load past the n-th fails.
pub struct CountingLoader {
    rules: Vec<Arc<dyn ResolutionRule>>,
    succeed_for: usize,
    loads: AtomicUsize,
}

impl CountingLoader {
    pub fn new(rules: Vec<Arc<dyn ResolutionRule>>) -> Self {
        Self {
            rules,
            succeed_for: usize::MAX,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn failing_after(mut self, loads: usize) -> Self {
        self.succeed_for = loads;
        self
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RuleLoader for CountingLoader {
    async fn load(&self) -> Result<Vec<Arc<dyn ResolutionRule>>, DomainError> {
        let done = self.loads.fetch_add(1, Ordering::SeqCst);
        if done >= self.succeed_for {
            return Err(DomainError::RecordsDirMissing("/gone".to_string()));
        }
        Ok(self.rules.clone())
    }

    fn source(&self) -> String {
        "fixed".to_string()
    }
}

pub fn soa_config() -> SoaConfig {
    SoaConfig {
        contact: "hostmaster.my.net".to_string(),
        nameserver: "ns1.my.net".to_string(),
    }
}

pub fn foo_rule() -> Arc<dyn ResolutionRule> {
    Arc::new(FnRule::for_name("foo.my.net", |request| {
        Ok(Answer::for_request(request).record(QueryType::A, "1.2.3.4"))
    }))
}

pub fn broken_rule() -> Arc<dyn ResolutionRule> {
    Arc::new(FnRule::for_name("broken.my.net", |_| {
        Err(RuleError::Failed("no upstream".to_string()))
    }))
}

/// Session over in-memory input with an already populated registry and a
/// reload interval long enough never to come due.
pub async fn session_with<'a>(
    input: &'a str,
    rules: Vec<Arc<dyn ResolutionRule>>,
) -> PipeSession<&'a [u8], Vec<u8>> {
    let loader = Arc::new(CountingLoader::new(rules));
    session_with_loader(input, loader, Duration::from_secs(3600)).await
}

/// Session whose registry was loaded once from `loader`.
pub async fn session_with_loader<'a>(
    input: &'a str,
    loader: Arc<CountingLoader>,
    interval: Duration,
) -> PipeSession<&'a [u8], Vec<u8>> {
    let registry = Arc::new(ResolverRegistry::new());
    let mut reload = ReloadRecordsUseCase::new(loader, registry.clone(), interval);
    reload.reload().await.expect("initial load succeeds");

    let answer_query = AnswerQueryUseCase::new(registry, soa_config());
    PipeSession::new(input.as_bytes(), Vec::new(), answer_query, reload, BANNER)
}
