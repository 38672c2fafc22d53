use super::record_file::RecordFile;
use super::template_rule::TemplateRule;
use async_trait::async_trait;
use pipe_backend_application::ports::{ResolutionRule, RuleLoader};
use pipe_backend_domain::DomainError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, warn};

pub const RECORD_FILE_SUFFIX: &str = ".prb";

/// Loads every `.prb` file in a directory.
///
/// Files are read in file-name order and their records registered in the
/// order they appear, so the first matching record across the directory
/// wins.
pub struct DirectoryRuleLoader {
    dir: PathBuf,
}

impl DirectoryRuleLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn ensure_dir(&self) -> Result<(), DomainError> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(DomainError::RecordsDirMissing(self.dir.display().to_string()))
        }
    }

    async fn record_files(&self) -> Result<Vec<PathBuf>, DomainError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(|e| {
            DomainError::Io(format!("reading {}: {}", self.dir.display(), e))
        })?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::Io(e.to_string()))?
        {
            let is_record = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(RECORD_FILE_SUFFIX));
            if is_record {
                files.push(entry.path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Parses one record file into its rules.
    pub async fn load_file(path: &Path) -> Result<Vec<Arc<dyn ResolutionRule>>, DomainError> {
        let record_error = |reason: String| DomainError::RecordFile {
            path: path.display().to_string(),
            reason,
        };

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| record_error(e.to_string()))?;
        let file = RecordFile::parse(&contents).map_err(record_error)?;

        file.records
            .iter()
            .map(|entry| {
                TemplateRule::compile(entry)
                    .map(|rule| Arc::new(rule) as Arc<dyn ResolutionRule>)
                    .map_err(record_error)
            })
            .collect()
    }
}

#[async_trait]
impl RuleLoader for DirectoryRuleLoader {
    async fn load(&self) -> Result<Vec<Arc<dyn ResolutionRule>>, DomainError> {
        self.ensure_dir()?;

        let mut rules = Vec::new();
        for path in self.record_files().await? {
            warn!(path = %path.display(), "Loading new record");
            match Self::load_file(&path).await {
                Ok(file_rules) => rules.extend(file_rules),
                Err(e) => error!(error = %e, "Skipping record file"),
            }
        }

        Ok(rules)
    }

    fn source(&self) -> String {
        self.dir.display().to_string()
    }
}
