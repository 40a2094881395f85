//! Video upload and signed-URL integration tests.

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::setup_test_app;

#[tokio::test]
async fn upload_stores_video_under_suffixed_name() {
    let app = setup_test_app().await;

    let data = b"fake mp4 bytes".to_vec();
    let form = MultipartForm::new().add_part(
        "video",
        Part::bytes(data.clone())
            .file_name("clip.mp4")
            .mime_type("video/mp4"),
    );

    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    let url = body["url"].as_str().unwrap();

    // Name is the original stem plus a random suffix.
    let stored_name = url.rsplit('/').next().unwrap();
    assert!(stored_name.starts_with("clip__"));
    assert_eq!(stored_name.len(), "clip__".len() + 15);

    let stored = app.video_uploads().download(stored_name).await.unwrap();
    assert_eq!(stored, data);
}

#[tokio::test]
async fn upload_without_video_field_is_400() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part(
        "attachment",
        Part::bytes(b"bytes".to_vec()).file_name("clip.mp4"),
    );

    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn two_uploads_of_the_same_file_get_distinct_names() {
    let app = setup_test_app().await;

    for _ in 0..2 {
        let form = MultipartForm::new().add_part(
            "video",
            Part::bytes(b"same bytes".to_vec())
                .file_name("clip.mp4")
                .mime_type("video/mp4"),
        );
        let response = app.client().post("/upload").multipart(form).await;
        assert_eq!(response.status_code(), 200);
    }

    let entries = app.video_uploads().list().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_ne!(entries[0].key, entries[1].key);
}

#[tokio::test]
async fn signed_url_points_at_the_video_uploads_bucket() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/mymovie.mp4/url").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    // Local backend has no signing; the public URL comes back.
    assert_eq!(
        body["url"],
        "http://localhost:3002/media/video-uploads/mymovie.mp4"
    );
}
