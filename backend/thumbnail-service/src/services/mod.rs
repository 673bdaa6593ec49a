/// Service layer for thumbnail generation
///
/// - Storage: object store abstraction with S3 and in-memory backends
/// - Thumbnail: event parsing, image processing and the invocation handler
pub mod storage;
pub mod thumbnail;

pub use storage::{InMemoryObjectStore, ObjectStore, S3ObjectStore};
pub use thumbnail::{StoredThumbnail, ThumbnailHandler, UploadEvent};
