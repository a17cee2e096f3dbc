//! Garage service: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/garage-service/config.toml)
//! garage-service
//!
//! # Custom config path
//! garage-service --config /etc/garage-service/config.toml
//!
//! # Override the port
//! garage-service --port 9090
//!
//! # Validate config without starting
//! garage-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use car_garage::config::AppConfig;
use car_garage::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "garage-service",
    version,
    about = "REST service for cars, garages and maintenance appointments",
    long_about = "Garage service: REST API for managing cars, garages, maintenance \
                  appointments and monthly garage request reports.\n\n\
                  Default config: ~/.config/garage-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "GARAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(car_garage::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            if cli.check {
                eprintln!("❌ Invalid configuration {}: {}", config_path.display(), e);
                std::process::exit(1);
            }
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(
                    cli.log_level.as_deref().unwrap_or("info"),
                ))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.listen_address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
