/// Error types for Thumbnail Service
///
/// Every step of the per-event pipeline has its own variant so failures stay
/// distinguishable in tests and debug logs. None of them reach the Lambda
/// runtime: the handler logs and swallows them at the outer boundary.
use thiserror::Error;

/// Result type for thumbnail-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Event payload is not shaped like a storage put notification
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// Source object does not exist
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Source object could not be retrieved
    #[error("Storage access error: {0}")]
    StorageAccess(String),

    /// Fetched bytes are not a decodable image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Thumbnail could not be encoded
    #[error("Failed to encode JPEG: {0}")]
    Encode(String),

    /// Output key cannot be derived from the source key
    #[error("Cannot derive thumbnail key: {0}")]
    KeyDerivation(String),

    /// Thumbnail could not be written to storage
    #[error("Write error: {0}")]
    Write(String),

    /// Internal error (task join failures and the like)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedEvent(err.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Encoding(_) => AppError::Encode(err.to_string()),
            _ => AppError::Decode(err.to_string()),
        }
    }
}
