//! Signup Daemon - Extracurricular activity signup service
//!
//! The signup daemon provides:
//! - REST API for listing activities and managing rosters
//! - Static front-end hosting under `/static`

use clap::Parser;
use signup_daemon::{DaemonConfig, DaemonError, DaemonResult, Server};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Signup Daemon CLI
#[derive(Parser)]
#[command(name = "signupd")]
#[command(about = "Signup Daemon - Extracurricular activity signup service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SIGNUP_CONFIG")]
    config: Option<String>,

    /// Listen address, e.g. 127.0.0.1:8000
    #[arg(short, long, env = "SIGNUP_LISTEN_ADDR")]
    listen: Option<String>,

    /// Seed catalog file; the built-in catalog is used when omitted
    #[arg(short, long, env = "SIGNUP_SEED")]
    seed: Option<PathBuf>,

    /// Directory with the static front-end
    #[arg(long, env = "SIGNUP_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "SIGNUP_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "SIGNUP_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(seed) = cli.seed {
        config.catalog.seed_path = Some(seed);
    }
    if let Some(dir) = cli.static_dir {
        config.static_files.dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        seed = ?config.catalog.seed_path,
        "Starting Mergington activity signup daemon"
    );

    // Create and run server
    let server = Server::new(config)?;
    server.run().await
}
