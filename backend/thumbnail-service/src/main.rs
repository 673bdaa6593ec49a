//! Thumbnail Service - Lambda entry point
//!
//! Receives S3 put notifications and writes a 128x128-bounded JPEG preview of
//! each uploaded image under the bucket's `thumbnails/` prefix.
//!
//! Environment variables:
//! - AWS_REGION: Region of the S3 client (default: "us-east-1")
//! - S3_ENDPOINT: Optional S3-compatible endpoint (e.g. MinIO)
//! - S3_FORCE_PATH_STYLE: Use path-style addressing (default: false)
//! - RUST_LOG: Log filter (default: "thumbnail_service=info")

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use thumbnail_service::services::{S3ObjectStore, ThumbnailHandler};
use thumbnail_service::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    thumbnail_service::logging::init();

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    // One client per container, shared by every invocation it serves
    let store = S3ObjectStore::from_config(&config.s3).await;
    let handler = ThumbnailHandler::new(Arc::new(store));
    info!(region = %config.s3.region, "Thumbnail handler initialized");

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let handler = handler.clone();
        async move {
            handler.handle(&event.payload).await;
            Ok::<(), Error>(())
        }
    }))
    .await
}
