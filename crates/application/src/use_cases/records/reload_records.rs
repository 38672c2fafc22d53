use crate::ports::RuleLoader;
use crate::services::ResolverRegistry;
use pipe_backend_domain::DomainError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Repopulates the registry from its loader once the reload interval has
/// elapsed. Polled inline after each exchange; there is no timer task.
pub struct ReloadRecordsUseCase {
    loader: Arc<dyn RuleLoader>,
    registry: Arc<ResolverRegistry>,
    interval: Duration,
    last_reload: Option<Instant>,
}

impl ReloadRecordsUseCase {
    pub fn new(
        loader: Arc<dyn RuleLoader>,
        registry: Arc<ResolverRegistry>,
        interval: Duration,
    ) -> Self {
        Self {
            loader,
            registry,
            interval,
            last_reload: None,
        }
    }

    /// Loads the full rule set and swaps it in. The interval restarts when
    /// loading finishes.
    pub async fn reload(&mut self) -> Result<usize, DomainError> {
        let rules = self.loader.load().await?;
        let count = rules.len();

        self.registry.replace_all(rules);
        self.last_reload = Some(Instant::now());

        info!(rules = count, source = %self.loader.source(), "Records loaded");

        Ok(count)
    }

    pub fn is_due(&self) -> bool {
        match self.last_reload {
            Some(at) => at.elapsed() > self.interval,
            None => true,
        }
    }

    /// Reloads when due. A failed reload keeps the current rule set live and
    /// waits a full interval before trying again.
    pub async fn reload_if_due(&mut self) -> bool {
        if !self.is_due() {
            return false;
        }

        info!(
            source = %self.loader.source(),
            "Reloading records from disk due to reload_interval"
        );

        match self.reload().await {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "Record reload failed, keeping current records");
                self.last_reload = Some(Instant::now());
                false
            }
        }
    }

    pub fn last_reload(&self) -> Option<Instant> {
        self.last_reload
    }
}
