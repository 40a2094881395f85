//! WebSocket push channel integration tests.
//!
//! These drive a real listener so a real WebSocket client can connect.

mod helpers;

use futures_util::StreamExt;
use mediabridge_core::models::RelayNotice;
use std::time::Duration;

async fn serve_app() -> (
    std::sync::Arc<mediabridge_api::state::AppState>,
    std::net::SocketAddr,
    tempfile::TempDir,
) {
    let (state, router, temp_dir) = helpers::build_app().await;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (state, addr, temp_dir)
}

async fn wait_for_subscribers(state: &mediabridge_api::state::AppState, count: usize) {
    for _ in 0..200 {
        if state.broadcaster.receiver_count() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("push channel clients never registered");
}

#[tokio::test]
async fn connected_client_receives_exactly_one_frame_per_notice() {
    let (state, addr, _temp_dir) = serve_app().await;

    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", addr))
        .await
        .unwrap();

    wait_for_subscribers(&state, 1).await;

    state.broadcaster.broadcast(RelayNotice {
        source: "video-exported-upload".to_string(),
        message: "Video export uploaded".to_string(),
    });

    let frame = tokio::time::timeout(Duration::from_secs(5), ws.next())
        .await
        .expect("timed out waiting for notice")
        .expect("socket closed")
        .expect("socket error");
    assert_eq!(frame.into_text().unwrap(), "Video export uploaded");

    // A single notice produces a single frame.
    let second = tokio::time::timeout(Duration::from_millis(200), ws.next()).await;
    assert!(second.is_err());
}

#[tokio::test]
async fn every_connected_client_receives_the_notice() {
    let (state, addr, _temp_dir) = serve_app().await;

    let (mut ws1, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", addr))
        .await
        .unwrap();
    let (mut ws2, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", addr))
        .await
        .unwrap();

    wait_for_subscribers(&state, 2).await;

    state.broadcaster.broadcast(RelayNotice {
        source: "sound-matched-upload".to_string(),
        message: "Sound matches uploaded".to_string(),
    });

    for ws in [&mut ws1, &mut ws2] {
        let frame = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for notice")
            .expect("socket closed")
            .expect("socket error");
        assert_eq!(frame.into_text().unwrap(), "Sound matches uploaded");
    }
}

#[tokio::test]
async fn notice_before_any_connection_is_dropped() {
    let (state, addr, _temp_dir) = serve_app().await;

    // Broadcast with nobody connected; must not be replayed later.
    state.broadcaster.broadcast(RelayNotice {
        source: "extracted-event-upload".to_string(),
        message: "Extracted events uploaded".to_string(),
    });

    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", addr))
        .await
        .unwrap();
    wait_for_subscribers(&state, 1).await;

    let frame = tokio::time::timeout(Duration::from_millis(200), ws.next()).await;
    assert!(frame.is_err());
}
