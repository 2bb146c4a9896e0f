use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::simulate::DecisionFlags;

#[derive(Parser, Debug)]
#[command(name = "faceabc", version, about = "FaceABC ethical facial-recognition workflow demo")]
struct Cli {
    /// Log filter (e.g. "info", "faceabc_workflow=debug"). Overrides RUST_LOG.
    #[arg(long, global = true, env = "FACEABC_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web dashboard.
    Serve {
        /// Configuration file (defaults to ./faceabc.yaml when present)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Override the dashboard host
        #[arg(long)]
        host: Option<String>,

        /// Override the dashboard port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as YAML.
    Config {
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Route one confidence score headlessly and print the ledger as CSV.
    Simulate {
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Confidence score in [0, 1]
        #[arg(long)]
        confidence: f64,

        #[command(flatten)]
        decision: DecisionFlags,
    },
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    // stdout is reserved for command output (YAML, CSV).
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.cmd {
        Command::Serve { config, host, port } => {
            commands::serve::run(config.as_deref(), host, port).await?
        }
        Command::Config { config } => commands::config::show(config.as_deref())?,
        Command::Simulate {
            config,
            confidence,
            decision,
        } => commands::simulate::run(config.as_deref(), confidence, decision.decision())?,
    }

    Ok(())
}
