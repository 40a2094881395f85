//! Common utilities for the file upload handlers

use axum::extract::Multipart;
use mediabridge_core::AppError;
use rand::{distr::Alphanumeric, Rng};

/// Extract file data, filename, and content type from a multipart form.
/// Only the field named "video" is read; other fields are skipped.
pub async fn extract_video_field(
    mut multipart: Multipart,
) -> Result<(Vec<u8>, String, String), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "video" {
            let filename = field
                .file_name()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let content_type = field
                .content_type()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            return Ok((data.to_vec(), filename, content_type));
        }
    }

    Err(AppError::BadRequest("No file uploaded.".to_string()))
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Original filename without its final extension. A name with no extension,
/// or only a leading dot, is kept whole.
pub fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(0) | None => filename,
        Some(index) => &filename[..index],
    }
}

/// Sanitize a filename to prevent path traversal and invalid characters.
/// Returns an error if the filename contains path traversal attempts.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(AppError::InvalidInput(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

/// Random alphanumeric suffix appended to uploaded video names.
pub fn random_suffix(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_filename_rejects_path_traversal() {
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("foo..bar").is_err());
    }

    #[test]
    fn sanitize_filename_strips_directories() {
        assert_eq!(sanitize_filename("dir/clip.mp4").unwrap(), "clip.mp4");
    }

    #[test]
    fn sanitize_filename_accepts_valid_names() {
        assert_eq!(sanitize_filename("clip.mp4").unwrap(), "clip.mp4");
        assert_eq!(sanitize_filename("my-file_1.mov").unwrap(), "my-file_1.mov");
    }

    #[test]
    fn sanitize_filename_replaces_invalid_characters() {
        assert_eq!(sanitize_filename("a b?c.mp4").unwrap(), "a_b_c.mp4");
    }

    #[test]
    fn file_stem_strips_final_extension() {
        assert_eq!(file_stem("clip.mp4"), "clip");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn file_stem_keeps_names_without_extension() {
        assert_eq!(file_stem("clip"), "clip");
        assert_eq!(file_stem(".env"), ".env");
    }

    #[test]
    fn random_suffix_is_alphanumeric_with_requested_length() {
        let suffix = random_suffix(15);
        assert_eq!(suffix.len(), 15);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn validate_file_size_enforces_limit() {
        assert!(validate_file_size(10, 100).is_ok());
        assert!(validate_file_size(101, 100).is_err());
    }
}
