//! Thumbnail handler - coordinates thumbnail generation for one upload event
//!
//! This handler runs the complete workflow for a single invocation:
//! 1. Parse bucket and key from the notification
//! 2. Download the original from storage
//! 3. Generate the thumbnail
//! 4. Upload it under the `thumbnails` prefix of the same bucket
//!
//! Every failure is logged and swallowed; nothing is written unless the
//! thumbnail was fully generated.

use super::event::UploadEvent;
use super::key::thumbnail_key;
use super::processor::{ThumbnailProcessor, THUMBNAIL_CONTENT_TYPE};
use crate::error::Result;
use crate::services::storage::ObjectStore;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Thumbnail written by a successful invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredThumbnail {
    pub bucket: String,
    pub key: String,
    pub width: u32,
    pub height: u32,
    pub size: usize,
}

/// Handler for storage upload notifications
#[derive(Clone)]
pub struct ThumbnailHandler {
    store: Arc<dyn ObjectStore>,
    processor: ThumbnailProcessor,
}

impl ThumbnailHandler {
    /// Create a handler writing through the given store
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            processor: ThumbnailProcessor::new(),
        }
    }

    /// Handle one upload notification
    ///
    /// Never fails: the outcome is reported through the log only.
    pub async fn handle(&self, payload: &serde_json::Value) {
        let instance_id = Uuid::new_v4();

        let event = match UploadEvent::from_notification(payload) {
            Ok(event) => event,
            Err(e) => {
                debug!(instance_id = %instance_id, error = %e, "Unusable upload notification");
                error!(
                    "Failed to create the thumbnail. Instance={}, bucket=-, key=-",
                    instance_id
                );
                return;
            }
        };

        info!(
            "Instance={}, bucket={}, key={}",
            instance_id, event.bucket, event.key
        );

        match self.process(&event).await {
            Ok(stored) => {
                debug!(
                    instance_id = %instance_id,
                    thumb_key = %stored.key,
                    width = stored.width,
                    height = stored.height,
                    size = stored.size,
                    "Thumbnail stored"
                );
                info!(
                    "Successfully created the thumbnail. Instance={}, bucket={}, key={}",
                    instance_id, event.bucket, event.key
                );
            }
            Err(e) => {
                debug!(instance_id = %instance_id, error = %e, "Thumbnail pipeline failed");
                error!(
                    "Failed to create the thumbnail. Instance={}, bucket={}, key={}",
                    instance_id, event.bucket, event.key
                );
            }
        }
    }

    /// Generate and store the thumbnail for an already-parsed event
    pub async fn process(&self, event: &UploadEvent) -> Result<StoredThumbnail> {
        let original_data = self.store.get_object(&event.bucket, &event.key).await?;

        let thumbnail = self.processor.generate_async(original_data).await?;

        let thumb_key = thumbnail_key(&event.key)?;
        let size = thumbnail.data.len();

        self.store
            .put_object(
                &event.bucket,
                &thumb_key,
                thumbnail.data,
                THUMBNAIL_CONTENT_TYPE,
            )
            .await?;

        Ok(StoredThumbnail {
            bucket: event.bucket.clone(),
            key: thumb_key,
            width: thumbnail.width,
            height: thumbnail.height,
            size,
        })
    }
}
