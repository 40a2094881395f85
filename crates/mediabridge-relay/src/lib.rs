//! Mediabridge Relay Library
//!
//! Bridges queue subscriptions to the push channel: every queue message is
//! acknowledged unconditionally and turned into one broadcast notice for all
//! connected clients.

pub mod broadcast;
pub mod subscriber;

pub use broadcast::Broadcaster;
pub use subscriber::RelaySubscriber;
