/// In-memory object store
///
/// Used by tests and for running the handler locally without S3.
use super::ObjectStore;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// An object held by the in-memory store
#[derive(Clone, Debug)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: Option<String>,
}

#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<(String, String), StoredObject>>,
    put_count: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object, bypassing the write counter
    pub async fn insert(&self, bucket: &str, key: &str, body: impl Into<Bytes>) {
        self.objects.write().await.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body: body.into(),
                content_type: None,
            },
        );
    }

    pub async fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// All keys currently held in `bucket`, sorted
    pub async fn keys(&self, bucket: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .read()
            .await
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Number of successful `put_object` calls
    pub fn put_count(&self) -> usize {
        self.put_count.load(Ordering::SeqCst)
    }

    /// Make every subsequent `put_object` fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        self.object(bucket, key)
            .await
            .map(|o| o.body)
            .ok_or_else(|| AppError::ObjectNotFound(format!("s3://{}/{}", bucket, key)))
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Write(format!(
                "simulated write failure for s3://{}/{}",
                bucket, key
            )));
        }

        self.objects.write().await.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: Some(content_type.to_string()),
            },
        );
        self.put_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
