//! Push-channel fan-out.
//!
//! A single broadcast channel carries every relay notice to every connected
//! client. Sends are fire-and-forget: a notice published with no connected
//! clients is dropped, and a lagging client misses notices rather than
//! applying backpressure to the relay.

use mediabridge_core::models::RelayNotice;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct Broadcaster {
    sender: broadcast::Sender<RelayNotice>,
}

impl Broadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Register a new push-channel client.
    pub fn subscribe(&self) -> broadcast::Receiver<RelayNotice> {
        self.sender.subscribe()
    }

    /// Send a notice to every connected client. Returns how many clients the
    /// notice was delivered to.
    pub fn broadcast(&self, notice: RelayNotice) -> usize {
        match self.sender.send(notice) {
            Ok(count) => {
                tracing::debug!(delivered = count, "Notice broadcast to push channel");
                count
            }
            Err(_) => {
                // No connected clients; not an error.
                tracing::trace!("Notice dropped, no push-channel clients connected");
                0
            }
        }
    }

    /// Number of currently connected clients.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
