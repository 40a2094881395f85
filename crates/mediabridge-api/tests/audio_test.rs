//! Audio route integration tests: multi-bucket fallback probing.

mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn audio_served_from_fallback_bucket_with_literal_name() {
    let app = setup_test_app().await;

    let data = b"RIFF....WAVEfmt fallback bytes".to_vec();
    app.audio_probe(1)
        .upload("door_close.wav", "audio/wav", data.clone())
        .await
        .unwrap();

    let response = app.client().get("/audio/door_close.wav").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("content-type"), "audio/wav");
    assert_eq!(response.as_bytes().as_ref(), data.as_slice());
}

#[tokio::test]
async fn audio_library_probed_with_mp3_substitution() {
    let app = setup_test_app().await;

    let data = b"ID3 mp3 rendition".to_vec();
    app.audio_probe(0)
        .upload("whoosh.mp3", "audio/mpeg", data.clone())
        .await
        .unwrap();

    let response = app.client().get("/audio/whoosh.wav").await;

    assert_eq!(response.status_code(), 200);
    // Content type stays audio/wav even for the mp3 rendition.
    assert_eq!(response.header("content-type"), "audio/wav");
    assert_eq!(response.as_bytes().as_ref(), data.as_slice());
}

#[tokio::test]
async fn audio_archive_bucket_probed_last() {
    let app = setup_test_app().await;

    let data = b"compressed archive rendition".to_vec();
    app.audio_probe(2)
        .upload("tail.mp3", "audio/mpeg", data.clone())
        .await
        .unwrap();

    let response = app.client().get("/audio/tail.wav").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), data.as_slice());
}

#[tokio::test]
async fn audio_library_bucket_wins_over_fallback() {
    let app = setup_test_app().await;

    app.audio_probe(0)
        .upload("clip.mp3", "audio/mpeg", b"library".to_vec())
        .await
        .unwrap();
    app.audio_probe(1)
        .upload("clip.wav", "audio/wav", b"fallback".to_vec())
        .await
        .unwrap();

    let response = app.client().get("/audio/clip.wav").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), b"library");
}

#[tokio::test]
async fn audio_missing_everywhere_is_404() {
    let app = setup_test_app().await;

    let response = app.client().get("/audio/nonexistent.wav").await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn audio_post_body_variant_streams_same_bytes() {
    let app = setup_test_app().await;

    let data = b"posted filename bytes".to_vec();
    app.audio_probe(1)
        .upload("posted.wav", "audio/wav", data.clone())
        .await
        .unwrap();

    let response = app
        .client()
        .post("/audio")
        .json(&serde_json::json!({ "filename": "posted.wav" }))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), data.as_slice());
}

#[tokio::test]
async fn audio_post_with_malformed_body_is_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/audio")
        .json(&serde_json::json!({ "file": "wrong-field.wav" }))
        .await;

    assert_eq!(response.status_code(), 400);
}
