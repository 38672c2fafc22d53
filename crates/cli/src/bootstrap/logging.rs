use pipe_backend_domain::config::LoggingConfig;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Standard output carries the protocol, so
/// logs go to the configured file or to standard error.
pub fn init_logging(config: &LoggingConfig) {
    let (level, level_warning) = config.level_filter();
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);

    let log_file = config.file.as_deref().and_then(open_log_file);
    let file_failed = config.file.is_some() && log_file.is_none();

    // A second init (tests, embedding) is ignored.
    let _ = match log_file {
        Some(file) => builder.with_writer(Mutex::new(file)).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if file_failed {
        error!(file = ?config.file, "Could not open log file, logging to stderr");
    }
    if let Some(warning) = level_warning {
        error!("{}", warning);
    }
}

fn open_log_file(path: &str) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}
