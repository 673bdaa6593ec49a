//! Thumbnail generation service
//!
//! This module provides thumbnail generation capabilities:
//! - Upload notification parsing
//! - Image processor for resizing and encoding
//! - Output key derivation
//! - Handler coordinating one invocation end to end

pub mod event;
pub mod key;
pub mod processor;
pub mod service;

pub use event::UploadEvent;
pub use key::thumbnail_key;
pub use processor::{ThumbnailProcessor, ThumbnailResult, THUMBNAIL_MAX_DIMENSION};
pub use service::{StoredThumbnail, ThumbnailHandler};
