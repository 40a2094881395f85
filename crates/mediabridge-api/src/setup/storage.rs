//! Storage setup and initialization

use crate::state::{AudioProbe, BucketSet};
use anyhow::Result;
use mediabridge_core::Config;
use mediabridge_storage::create_storage;

/// Build one storage handle per configured bucket.
///
/// The audio probe chain preserves the lookup order of the predecessors:
/// library (substituted), fallback (literal), archive (substituted).
pub async fn setup_buckets(config: &Config) -> Result<BucketSet> {
    tracing::info!("Initializing storage buckets...");

    let settings = config.storage();
    let names = config.buckets();

    let records = create_storage(settings, &names.records).await?;
    let video_uploads = create_storage(settings, &names.video_uploads).await?;

    let audio_probes = vec![
        AudioProbe {
            storage: create_storage(settings, &names.audio_library).await?,
            swap_wav_to_mp3: true,
        },
        AudioProbe {
            storage: create_storage(settings, &names.audio_fallback).await?,
            swap_wav_to_mp3: false,
        },
        AudioProbe {
            storage: create_storage(settings, &names.audio_archive).await?,
            swap_wav_to_mp3: true,
        },
    ];

    tracing::info!(
        backend = %records.backend_type(),
        records_bucket = %names.records,
        video_uploads_bucket = %names.video_uploads,
        audio_buckets = audio_probes.len(),
        "Storage buckets initialized"
    );

    Ok(BucketSet {
        records,
        video_uploads,
        audio_probes,
    })
}
