// Standard library
use std::error::Error;

// 3rd party crates
use clap::Parser;
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod cli;
mod detector;
mod functions;
mod providers;
mod settings;

// Project imports
use crate::cli::types::{Cli, Command};
use crate::detector::types::DetectorKind;
use crate::functions::run;
use crate::providers::cloudflare::types::Cloudflare;
use crate::settings::types::{ConfigManager, Settings};

/// Main entry point for the dynamic DNS updater.
///
/// Loads the configuration once, builds the selected address detector
/// and the Cloudflare record client, then hands both to the reconcile
/// loop. Configuration problems and an unsupported detector name are
/// fatal here; everything after startup degrades to skipped ticks.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli: Cli = Cli::parse();

    if let Some(Command::Version) = cli.command {
        cli::impls::print_version();
        return Ok(());
    }

    let mut manager: ConfigManager = ConfigManager::new(cli.config_path.clone())?;
    cli.apply_overrides(&mut manager.settings);
    manager.settings.validate()?;

    // setup logging.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(manager.settings.get_log_level())
        .add_directive("hyper_util=error".parse()?)
        .add_directive("hyper=error".parse()?)
        .add_directive("reqwest=error".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    info!("Settings have been loaded from {:?}", manager.config_path);

    let settings: Settings = manager.settings.clone();

    let kind: DetectorKind = settings.detector.kind.parse()?;
    let detector = kind.build(&settings.detector.interface)?;
    info!("Using the '{}' address detector", kind.as_str());

    let provider = Cloudflare::new(settings.cloudflare.clone())?;

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, _) = broadcast::channel(1);
    let shutdown_tx_clone = shutdown_tx.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        let _ = shutdown_tx_clone.send(());
    });

    if let Err(e) = run(
        &settings,
        detector,
        Box::new(provider),
        shutdown_tx.subscribe(),
    )
    .await
    {
        error!("Application error: {}", e);
    }

    info!("Shutdown complete.");
    Ok(())
}
