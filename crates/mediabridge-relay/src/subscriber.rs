//! Queue subscriber: one polling loop per configured subscription.
//!
//! Shutdown: [`RelaySubscriber::shutdown`] signals every loop to stop; it does
//! not wait for an in-flight poll to return. Messages are acknowledged
//! (deleted) before the notice is broadcast, and acknowledged regardless of
//! what the body contains.

use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::types::Message;
use aws_sdk_sqs::Client;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

use mediabridge_core::config::{RelayQueue, RelaySettings};
use mediabridge_core::models::RelayNotice;

use crate::broadcast::Broadcaster;

/// Delay before re-polling a queue after a receive error.
const RECEIVE_ERROR_BACKOFF_SECS: u64 = 5;

/// Maximum messages fetched per poll.
const RECEIVE_BATCH_SIZE: i32 = 10;

pub struct RelaySubscriber {
    shutdown_txs: Vec<mpsc::Sender<()>>,
}

impl RelaySubscriber {
    /// Spawn one polling loop per configured queue and return a handle that
    /// can signal them to stop.
    pub async fn start(settings: &RelaySettings, broadcaster: Broadcaster) -> Result<Self> {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = Client::new(&aws_config);

        let mut shutdown_txs = Vec::with_capacity(settings.queues.len());

        for queue in &settings.queues {
            let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
            shutdown_txs.push(shutdown_tx);

            tokio::spawn(poll_queue(
                client.clone(),
                queue.clone(),
                settings.poll_wait_secs,
                broadcaster.clone(),
                shutdown_rx,
            ));
        }

        tracing::info!(
            subscriptions = settings.queues.len(),
            "Notification relay started"
        );

        Ok(Self { shutdown_txs })
    }

    /// Signal every polling loop to stop claiming messages and exit.
    pub async fn shutdown(&self) {
        tracing::info!("Initiating notification relay shutdown");
        for shutdown_tx in &self.shutdown_txs {
            let _ = shutdown_tx.send(()).await;
        }
    }
}

async fn poll_queue(
    client: Client,
    queue: RelayQueue,
    poll_wait_secs: i32,
    broadcaster: Broadcaster,
    mut shutdown_rx: mpsc::Receiver<()>,
) {
    tracing::info!(
        queue_url = %queue.queue_url,
        notice = %queue.notice,
        "Relay subscription polling started"
    );

    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                tracing::info!(queue_url = %queue.queue_url, "Relay subscription stopped");
                break;
            }
            result = client
                .receive_message()
                .queue_url(&queue.queue_url)
                .max_number_of_messages(RECEIVE_BATCH_SIZE)
                .wait_time_seconds(poll_wait_secs)
                .send() =>
            {
                match result {
                    Ok(output) => {
                        for message in output.messages() {
                            handle_message(&client, &queue, &broadcaster, message).await;
                        }
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            queue_url = %queue.queue_url,
                            "Queue receive failed, will retry"
                        );
                        sleep(Duration::from_secs(RECEIVE_ERROR_BACKOFF_SECS)).await;
                    }
                }
            }
        }
    }
}

/// Process one queue message: log its payload, acknowledge it, broadcast the
/// subscription's notice. The message is acknowledged regardless of whether
/// the body parses.
async fn handle_message(
    client: &Client,
    queue: &RelayQueue,
    broadcaster: &Broadcaster,
    message: &Message,
) {
    match message.body().map(describe_payload) {
        Some(Ok(payload)) => {
            tracing::debug!(queue_url = %queue.queue_url, payload = %payload, "Queue message received");
        }
        Some(Err(e)) => {
            tracing::debug!(queue_url = %queue.queue_url, error = %e, "Queue message body is not JSON");
        }
        None => {
            tracing::debug!(queue_url = %queue.queue_url, "Queue message has no body");
        }
    }

    if let Some(receipt_handle) = message.receipt_handle() {
        if let Err(e) = client
            .delete_message()
            .queue_url(&queue.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
        {
            tracing::warn!(
                error = %e,
                queue_url = %queue.queue_url,
                "Failed to acknowledge queue message"
            );
        }
    }

    let delivered = broadcaster.broadcast(RelayNotice {
        source: queue.queue_url.clone(),
        message: queue.notice.clone(),
    });

    tracing::debug!(
        queue_url = %queue.queue_url,
        delivered,
        "Relay notice broadcast"
    );
}

/// Parse a message body as JSON. The payload itself is only logged; the
/// broadcast carries the subscription's fixed notice.
fn describe_payload(body: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(body)
}
