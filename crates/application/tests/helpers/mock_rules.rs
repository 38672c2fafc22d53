#![allow(dead_code)]

use async_trait::async_trait;
use pipe_backend_application::ports::{ResolutionRule, RuleLoader};
use pipe_backend_application::services::FnRule;
use pipe_backend_domain::{
    Answer, DomainError, PipeRequest, QueryClass, QueryType, RecordKind, RuleError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn lookup(qname: &str, qtype: QueryType) -> PipeRequest {
    PipeRequest::new(qname, QueryClass::IN, qtype, "1", "9.9.9.9", "0.0.0.0")
}

/// Record rule answering `qname` with a single A record.
pub fn a_record(qname: &str, address: &'static str) -> Arc<dyn ResolutionRule> {
    Arc::new(FnRule::for_name(qname, move |request| {
        Ok(Answer::for_request(request).record(QueryType::A, address))
    }))
}

pub fn zone_rule(qname: &str, address: &'static str) -> Arc<dyn ResolutionRule> {
    Arc::new(
        FnRule::for_name(qname, move |request| {
            Ok(Answer::for_request(request).record(QueryType::A, address))
        })
        .with_kind(RecordKind::Zone),
    )
}

pub fn not_found_rule(qname: &str) -> Arc<dyn ResolutionRule> {
    Arc::new(FnRule::for_name(qname, |_| Err(RuleError::NotFound)))
}

pub fn failing_rule(qname: &str) -> Arc<dyn ResolutionRule> {
    Arc::new(FnRule::for_name(qname, |_| {
        Err(RuleError::Failed("backend unreachable".to_string()))
    }))
}

pub fn panicking_rule(qname: &str) -> Arc<dyn ResolutionRule> {
    Arc::new(FnRule::for_name(qname, |_| panic!("record blew up")))
}

/// Loader returning a preset rule set, or an error, and counting calls.
pub struct StaticLoader {
    rules: Mutex<Result<Vec<Arc<dyn ResolutionRule>>, DomainError>>,
    calls: AtomicUsize,
}

impl StaticLoader {
    pub fn new(rules: Vec<Arc<dyn ResolutionRule>>) -> Self {
        Self {
            rules: Mutex::new(Ok(rules)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_rules(&self, rules: Vec<Arc<dyn ResolutionRule>>) {
        *self.rules.lock().unwrap() = Ok(rules);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.rules.lock().unwrap() = Err(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RuleLoader for StaticLoader {
    async fn load(&self) -> Result<Vec<Arc<dyn ResolutionRule>>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rules.lock().unwrap().clone()
    }

    fn source(&self) -> String {
        "static".to_string()
    }
}
