//! Thumbnail Service
//!
//! Lambda handler that turns every image uploaded to a bucket into a JPEG
//! preview of at most 128x128 pixels under the bucket's `thumbnails/` prefix.

pub mod config;
pub mod error;
pub mod logging;
pub mod services;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
