//! Service-wide constants.
//!
//! These are the defaults the three forked predecessors of this service hard-coded;
//! every one of them can be overridden through the environment (see `config`).

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3002;

/// Bucket holding one JSON record per project.
pub const DEFAULT_RECORDS_BUCKET: &str = "sound-matched-events";

/// The fixed record served by `/api/json-data`.
pub const DEFAULT_RECORDS_FILE: &str = "1917 manual_events_manual_sounds.json";

/// Primary audio library; probed with the `.wav` -> `.mp3` substitution.
pub const DEFAULT_AUDIO_LIBRARY_BUCKET: &str = "foley-sound-library-mp3";

/// Fallback audio bucket; probed with the literal filename.
pub const DEFAULT_AUDIO_FALLBACK_BUCKET: &str = "demo-sounds";

/// Compressed archive bucket; probed last, also with the substitution.
pub const DEFAULT_AUDIO_ARCHIVE_BUCKET: &str = "foley-sound-library-compressed";

/// Bucket receiving multipart video uploads.
pub const DEFAULT_VIDEO_UPLOADS_BUCKET: &str = "auto-foley-video-uploads";

/// Length of the random suffix appended to uploaded video names.
pub const UPLOAD_SUFFIX_LENGTH: usize = 15;

/// Default lifetime of signed read URLs, in minutes.
pub const DEFAULT_SIGNED_URL_TTL_MINUTES: u64 = 2000;

/// Known queue subscriptions and the notice broadcast for each.
/// Used to derive a notice when a configured queue URL carries none.
pub const DEFAULT_RELAY_NOTICES: [(&str, &str); 3] = [
    ("video-exported-upload", "Video export uploaded"),
    ("extracted-event-upload", "Extracted events uploaded"),
    ("sound-matched-upload", "Sound matches uploaded"),
];

/// Broadcast notice for queues not covered by [`DEFAULT_RELAY_NOTICES`].
pub const FALLBACK_RELAY_NOTICE: &str = "Storage updated";
