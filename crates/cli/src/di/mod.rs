use pipe_backend_application::services::ResolverRegistry;
use pipe_backend_application::use_cases::{AnswerQueryUseCase, ReloadRecordsUseCase};
use pipe_backend_domain::Config;
use pipe_backend_infrastructure::records::DirectoryRuleLoader;
use std::sync::Arc;
use tracing::info;

/// Registry and use cases wired for one process.
pub struct Records {
    pub registry: Arc<ResolverRegistry>,
    pub answer_query: AnswerQueryUseCase,
    pub reload: ReloadRecordsUseCase,
}

impl Records {
    /// Fails when the records directory is missing or cannot be read; both
    /// are fatal before the handshake.
    pub async fn load(config: &Config) -> anyhow::Result<Self> {
        let loader = Arc::new(DirectoryRuleLoader::new(&config.records.dir));
        loader.ensure_dir()?;

        let registry = Arc::new(ResolverRegistry::new());
        let mut reload = ReloadRecordsUseCase::new(
            loader,
            Arc::clone(&registry),
            config.records.reload_interval(),
        );
        reload.reload().await?;

        info!(
            rules = registry.len(),
            dir = %config.records.dir,
            "Resolver registry populated"
        );

        Ok(Self {
            answer_query: AnswerQueryUseCase::new(Arc::clone(&registry), config.soa.clone()),
            registry,
            reload,
        })
    }
}
