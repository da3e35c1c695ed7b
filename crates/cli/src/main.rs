mod args;
mod config;
mod output;
mod runner;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use args::{Cli, Commands};
use config::OutputConfig;
use runner::{run_analyze, run_signatures};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            report,
            format,
            signatures,
        } => {
            let config = OutputConfig::from_env(cli.no_color, format);
            run_analyze(&report, signatures.as_deref(), &config).await?;
        }
        Commands::Signatures { format, signatures } => {
            let config = OutputConfig::from_env(cli.no_color, format);
            run_signatures(signatures.as_deref(), &config)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries the report; logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
