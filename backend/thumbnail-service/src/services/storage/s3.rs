/// S3-backed object store
///
/// Wraps a single `aws_sdk_s3::Client` built at cold start and reused by every
/// invocation handled by the same Lambda container.
use super::ObjectStore;
use crate::config::S3Config;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

/// S3 object store
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Initialize AWS S3 client from config
    ///
    /// Credentials come from the default provider chain. A custom endpoint is
    /// only set for S3-compatible storage such as MinIO.
    pub async fn from_config(config: &S3Config) -> Self {
        use aws_sdk_s3::config::Region;

        let mut aws_config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint {
            aws_config_builder = aws_config_builder.endpoint_url(endpoint);
        }

        let aws_config = aws_config_builder.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
            .force_path_style(config.force_path_style)
            .build();

        tracing::debug!(
            region = %config.region,
            endpoint = ?config.endpoint,
            "S3 client initialized"
        );

        Self::new(Client::from_conf(s3_config))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| match e.into_service_error() {
                GetObjectError::NoSuchKey(_) => {
                    AppError::ObjectNotFound(format!("s3://{}/{}", bucket, key))
                }
                other => AppError::StorageAccess(format!(
                    "Failed to download s3://{}/{}: {}",
                    bucket,
                    key,
                    DisplayErrorContext(&other)
                )),
            })?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| AppError::StorageAccess(format!("Failed to read S3 object body: {e}")))?
            .into_bytes();

        Ok(bytes)
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                let error_msg = DisplayErrorContext(&e).to_string();
                if error_msg.contains("403") || error_msg.contains("Forbidden") {
                    AppError::Write("S3 auth failed (403): Check IAM permissions".to_string())
                } else if error_msg.contains("NoSuchBucket") {
                    AppError::Write(format!("S3 bucket not found: {}", bucket))
                } else {
                    AppError::Write(format!("S3 upload failed: {}", error_msg))
                }
            })?;

        Ok(())
    }
}
