//! Notification relay startup.

use anyhow::Result;
use mediabridge_core::Config;
use mediabridge_relay::{Broadcaster, RelaySubscriber};

/// Start the queue relay when enabled; its notices flow into `broadcaster`.
pub async fn setup_relay(
    config: &Config,
    broadcaster: Broadcaster,
) -> Result<Option<RelaySubscriber>> {
    if !config.relay().enabled {
        tracing::info!("Notification relay disabled");
        return Ok(None);
    }

    let subscriber = RelaySubscriber::start(config.relay(), broadcaster).await?;
    Ok(Some(subscriber))
}
