//! Object storage abstraction
//!
//! The handler only needs to read one object and write one object. Keeping that
//! behind a trait lets the Lambda share one S3 client across invocations while
//! tests run against the in-memory store.

pub mod memory;
pub mod s3;

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

pub use memory::InMemoryObjectStore;
pub use s3::S3ObjectStore;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full body of `bucket/key`.
    ///
    /// Fails with `AppError::ObjectNotFound` when the key does not exist and
    /// `AppError::StorageAccess` for any other retrieval failure.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes>;

    /// Write `body` to `bucket/key`, replacing any existing object.
    ///
    /// Fails with `AppError::Write`.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()>;
}
