mod config;
mod protocol;
mod server;
mod store;

use anyhow::Context;
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Config, LogConfig};
use server::Server;

/// HTTP key-value store
#[derive(Debug, Parser)]
#[command(name = "storedb", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Listening address, overrides `server_addr` from the config file
    #[arg(long)]
    addr: Option<String>,

    /// Log level or filter directive, overrides `log.level`
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(addr) = &self.addr {
            config.server_addr = addr.clone();
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Set up the global subscriber. `RUST_LOG` takes precedence over the config.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .with_context(|| format!("invalid log level '{}'", log.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path))?;
            builder.with_ansi(false).with_writer(Arc::new(file)).init();
        }
        None => builder.init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config.log)?;

    info!("Starting storedb - HTTP key-value store");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let server = Server::bind(&config.server_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;
    info!("Server listening on: {}", server.local_addr());

    server.run().await?;
    Ok(())
}
