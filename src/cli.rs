//! Command-line interface for connect6_gtp.

use clap::Parser;
use connect6_gtp::{ConfigError, EngineConfig};
use std::path::PathBuf;
use tracing::instrument;

/// Connect6 GTP engine - speaks GTP on stdin/stdout, logs to stderr
#[derive(Parser, Debug)]
#[command(name = "connect6_gtp")]
#[command(about = "Connect6 engine for GTP controllers such as GoGui", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial board size (2-100), overrides the config file
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Initial komi, overrides the config file
    #[arg(long, allow_hyphen_values = true)]
    pub komi: Option<f64>,

    /// Seed for genmove, overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter directive (falls back to RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Builds the engine configuration: file first, then flag overrides.
    #[instrument(skip(self))]
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::new(),
        };
        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if let Some(komi) = self.komi {
            config = config.with_komi(komi);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}
