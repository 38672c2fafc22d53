use clap::{Parser, Subcommand};
use pipe_backend_domain::CliOverrides;
use tracing::warn;

mod bootstrap;
mod di;
mod server;
mod tester;

#[derive(Parser)]
#[command(name = "pipe-backend")]
#[command(version)]
#[command(about = "Pipe backend answering DNS lookups from record files over stdin/stdout")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Directory holding .prb record files
    #[arg(short = 'd', long, value_name = "DIR", global = true)]
    records_dir: Option<String>,

    /// Seconds between record reloads
    #[arg(long)]
    reload_interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error, fatal)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one name through the record files and print the response
    Test {
        /// Name to look up
        #[arg(short = 'r', long)]
        record: String,

        /// Query type
        #[arg(short = 't', long = "type", default_value = "ANY")]
        qtype: String,

        /// Remote address presented to the records
        #[arg(long, default_value = "127.0.0.1")]
        remoteip: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        records_dir: cli.records_dir.clone(),
        reload_interval: cli.reload_interval,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    warn!(version = env!("CARGO_PKG_VERSION"), "Runner starting");

    let records = di::Records::load(&config).await?;

    match cli.command {
        Some(Command::Test {
            record,
            qtype,
            remoteip,
        }) => {
            print!(
                "{}",
                tester::render_lookup(&records.registry, &record, &qtype, &remoteip)
            );
        }
        None => server::run_pipe(&config, records).await?,
    }

    warn!("Runner exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_tester_arguments() {
        let cli = Cli::try_parse_from([
            "pipe-backend",
            "--records-dir",
            "/tmp/records",
            "test",
            "--record",
            "foo.my.net",
            "--type",
            "TXT",
        ])
        .unwrap();

        assert_eq!(cli.records_dir.as_deref(), Some("/tmp/records"));
        match cli.command {
            Some(Command::Test {
                record,
                qtype,
                remoteip,
            }) => {
                assert_eq!(record, "foo.my.net");
                assert_eq!(qtype, "TXT");
                assert_eq!(remoteip, "127.0.0.1");
            }
            None => panic!("expected test subcommand"),
        }
    }

    #[test]
    fn test_cli_without_subcommand_serves() {
        let cli = Cli::try_parse_from(["pipe-backend", "--reload-interval", "30"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.reload_interval, Some(30));
    }
}
