// Standard library
use std::error::Error;
use std::time::Duration;

// 3rd party crates
use tokio::sync::broadcast;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

// Project imports
use crate::detector::traits::Detector;
use crate::providers::DnsProvider;
use crate::settings::types::Settings;

/// Main reconcile loop: on every timer tick, detect the public
/// address, read the remote record, and write only on mismatch.
///
/// Every tick re-derives everything from scratch; there is no cached
/// last-known address, no retry and no backoff. A failing tick is
/// logged and skipped, resuming at the next timer fire. The loop runs
/// until a shutdown signal arrives.
pub async fn run(
    settings: &Settings,
    detector: Box<dyn Detector>,
    provider: Box<dyn DnsProvider>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), Box<dyn Error>> {
    let update_interval: u64 = settings.get_update_interval();
    info!("Updating DNS record every {} seconds", update_interval);

    // The first tick fires immediately, so an update runs at startup
    // before the timer cadence takes over.
    let mut timer = interval(Duration::from_secs(update_interval));

    loop {
        tokio::select! {
            Ok(_) = shutdown_rx.recv() => {
                info!("Received shutdown signal, stopping reconcile loop");
                break;
            }

            _ = timer.tick() => {
                reconcile_tick(detector.as_ref(), provider.as_ref()).await;
            }
        }
    }

    Ok(())
}

/// One reconcile tick: detect, read, compare, optionally write.
pub(crate) async fn reconcile_tick(detector: &dyn Detector, provider: &dyn DnsProvider) {
    let detected = match detector.determine().await {
        Ok(Some(ip)) => ip,
        Ok(None) => {
            // "No information" is not a writable value.
            warn!("public address unknown this cycle, skipping");
            return;
        }
        Err(e) => {
            error!("address detection failed: {}", e);
            return;
        }
    };
    info!("local public address is: {}", detected);

    let record: String = provider.read().await;
    info!("current record is: {}", record);

    if detected.to_string() != record {
        let done: bool = provider.write(&detected).await;
        info!("dns record updated: {}", done);
    } else {
        debug!("record already up to date");
    }
}
