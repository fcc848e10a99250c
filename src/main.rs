//! Connect6 GTP engine binary.
//!
//! Reads commands from stdin and writes replies to stdout. Logs go to stderr
//! so they never mix with protocol output.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use connect6_gtp::Engine;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_filter.as_deref());

    let config = cli.engine_config()?;
    info!(?config, "Starting Connect6 engine");

    let mut engine = Engine::new(&config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    engine.run(stdin.lock(), stdout.lock())?;

    info!("Engine stopped");
    Ok(())
}

#[instrument]
fn initialize_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,connect6_gtp=debug,connect6_rules=info")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
