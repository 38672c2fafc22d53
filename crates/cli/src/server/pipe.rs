use crate::di::Records;
use pipe_backend_domain::Config;
use pipe_backend_infrastructure::pipe::PipeSession;
use tokio::io::BufReader;
use tracing::info;

/// Serves the line protocol on standard input and output until the
/// upstream server closes the pipe.
pub async fn run_pipe(config: &Config, records: Records) -> anyhow::Result<()> {
    let Records {
        answer_query,
        reload,
        ..
    } = records;

    let mut session = PipeSession::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        answer_query,
        reload,
        config.backend.banner.clone(),
    );

    let summary = session.run().await?;

    info!(
        lookups = summary.lookups,
        answered = summary.answered,
        unknown = summary.unknown,
        failed = summary.failed,
        probes = summary.probes,
        malformed = summary.malformed,
        "Session summary"
    );

    Ok(())
}
