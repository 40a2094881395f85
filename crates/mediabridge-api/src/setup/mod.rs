//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod relay;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use mediabridge_core::Config;
use mediabridge_relay::Broadcaster;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded and validated successfully");

    // Setup storage bucket handles
    let buckets = storage::setup_buckets(&config).await?;

    // Push channel fan-out; shared by the relay and the WebSocket handler
    let broadcaster = Broadcaster::new(config.relay().channel_capacity);

    // Optional queue relay
    let relay = relay::setup_relay(&config, broadcaster.clone()).await?;

    let state = Arc::new(AppState {
        is_production: config.is_production(),
        buckets,
        broadcaster,
        relay,
        config: config.clone(),
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
