//! Application state and sub-state extractors.
//!
//! AppState aggregates the bucket handles and the push-channel broadcaster.
//! Sub-states can be extracted via Axum's `FromRef` so handlers depend only on
//! what they use.

use mediabridge_core::Config;
use mediabridge_relay::{Broadcaster, RelaySubscriber};
use mediabridge_storage::Storage;
use std::sync::Arc;

/// One bucket in the audio probe chain, and how the probe key is derived.
#[derive(Clone)]
pub struct AudioProbe {
    pub storage: Arc<dyn Storage>,
    /// Probe with `.wav` -> `.mp3` substituted into the requested filename.
    pub swap_wav_to_mp3: bool,
}

/// Named bucket handles the handlers address.
#[derive(Clone)]
pub struct BucketSet {
    /// Project records; also the target of `/upload-json`.
    pub records: Arc<dyn Storage>,
    /// Multipart video uploads; also the source of signed URLs.
    pub video_uploads: Arc<dyn Storage>,
    /// Audio buckets in probe order.
    pub audio_probes: Vec<AudioProbe>,
}

/// Main application state.
pub struct AppState {
    pub config: Config,
    pub buckets: BucketSet,
    pub broadcaster: Broadcaster,
    /// Relay handle; kept so the subscriber loops live as long as the server.
    pub relay: Option<RelaySubscriber>,
    pub is_production: bool,
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<Arc<AppState>> for BucketSet {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.buckets.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
