//! Upload notification parsing
//!
//! Extracts the bucket and object key from an S3 put notification. Only the
//! first record is consulted.

use crate::error::{AppError, Result};
use serde::Deserialize;
use tracing::debug;

/// S3 put notification, reduced to the fields the handler reads
#[derive(Debug, Deserialize)]
struct S3Notification {
    #[serde(rename = "Records")]
    records: Vec<NotificationRecord>,
}

#[derive(Debug, Deserialize)]
struct NotificationRecord {
    s3: S3Entity,
}

#[derive(Debug, Deserialize)]
struct S3Entity {
    bucket: S3Bucket,
    object: S3Object,
}

#[derive(Debug, Deserialize)]
struct S3Bucket {
    name: String,
}

#[derive(Debug, Deserialize)]
struct S3Object {
    key: String,
}

/// Bucket and decoded key of an uploaded object
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadEvent {
    pub bucket: String,
    pub key: String,
}

impl UploadEvent {
    /// Parse the first record of an S3 put notification
    pub fn from_notification(payload: &serde_json::Value) -> Result<Self> {
        let notification = S3Notification::deserialize(payload)?;

        if notification.records.len() > 1 {
            debug!(
                records = notification.records.len(),
                "Notification carries multiple records, only the first is processed"
            );
        }

        let record = notification
            .records
            .into_iter()
            .next()
            .ok_or_else(|| AppError::MalformedEvent("notification has no records".to_string()))?;

        Ok(Self {
            bucket: record.s3.bucket.name,
            key: decode_key(&record.s3.object.key)?,
        })
    }
}

/// Decode an S3 notification object key
///
/// Keys arrive form-encoded: `+` stands for a space and other reserved
/// characters are percent-escaped. A literal `+` in the key arrives as `%2B`.
pub fn decode_key(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| AppError::MalformedEvent(format!("object key is not valid UTF-8: {e}")))
}
