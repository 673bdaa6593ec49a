//! Thumbnail processor - generates thumbnails from original images
//!
//! Decodes an image, shrinks it to fit within a 128x128 box while maintaining aspect ratio,
//! and encodes it as JPEG. Images already inside the box keep their dimensions.
//!
//! Uses `spawn_blocking` for CPU-intensive operations to avoid blocking the async runtime.

use crate::error::{AppError, Result};
use bytes::Bytes;
use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageOutputFormat};
use std::io::Cursor;
use tracing::debug;

/// Bounding box for thumbnails, in pixels
pub const THUMBNAIL_MAX_DIMENSION: u32 = 128;

/// JPEG quality (0-100)
pub const JPEG_QUALITY: u8 = 75;

/// Content type of every generated thumbnail
pub const THUMBNAIL_CONTENT_TYPE: &str = "image/jpeg";

/// A decoded upload
pub struct SourceImage {
    pub image: DynamicImage,
    /// Detected container format, if the header was recognised
    pub format: Option<ImageFormat>,
}

/// Result of thumbnail generation
#[derive(Debug)]
pub struct ThumbnailResult {
    /// The thumbnail image data as JPEG
    pub data: Bytes,
    /// Width of the thumbnail
    pub width: u32,
    /// Height of the thumbnail
    pub height: u32,
}

/// Thumbnail processor
#[derive(Clone, Copy, Debug, Default)]
pub struct ThumbnailProcessor;

impl ThumbnailProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Generate a thumbnail from the given image data (blocking version)
    ///
    /// **Note:** This method performs CPU-intensive operations and should not be called
    /// directly from async code. Use `generate_async` instead.
    pub fn generate(&self, original_data: &[u8]) -> Result<ThumbnailResult> {
        let source = decode_source(original_data)?;

        let (orig_w, orig_h) = source.image.dimensions();
        debug!(
            original_width = orig_w,
            original_height = orig_h,
            source_format = ?source.format,
            "Processing image for thumbnail"
        );

        let (new_w, new_h) = fit_within(orig_w, orig_h, THUMBNAIL_MAX_DIMENSION);

        let thumbnail = if (new_w, new_h) == (orig_w, orig_h) {
            debug!("Image already within max dimensions, encoding as-is");
            source.image
        } else {
            source.image.resize_exact(new_w, new_h, FilterType::Lanczos3)
        };

        let data = encode_jpeg(&thumbnail)?;

        debug!(
            width = new_w,
            height = new_h,
            size = data.len(),
            "Thumbnail generated"
        );

        Ok(ThumbnailResult {
            data,
            width: new_w,
            height: new_h,
        })
    }

    /// Generate a thumbnail asynchronously using a blocking thread pool
    ///
    /// This method offloads the CPU-intensive image processing to a dedicated
    /// thread pool, preventing the async runtime from being blocked.
    pub async fn generate_async(self, original_data: Bytes) -> Result<ThumbnailResult> {
        tokio::task::spawn_blocking(move || self.generate(&original_data))
            .await
            .map_err(|e| AppError::Internal(format!("Thumbnail task panicked: {e}")))?
    }
}

/// Decode image bytes with every decoder limit lifted
///
/// Uploads are trusted, so arbitrarily large images are decoded rather than
/// rejected by the default allocation ceiling.
pub fn decode_source(data: &[u8]) -> Result<SourceImage> {
    let mut reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| AppError::Decode(format!("Failed to read image header: {e}")))?;
    reader.no_limits();

    let format = reader.format();
    let image = reader.decode()?;

    Ok(SourceImage { image, format })
}

/// Largest dimensions that fit within `max_dim` x `max_dim` and keep the aspect ratio
///
/// Images already inside the box are returned unchanged. Neither side drops below 1.
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    if width <= max_dim && height <= max_dim {
        return (width, height);
    }

    if width >= height {
        let ratio = max_dim as f64 / width as f64;
        (max_dim, ((height as f64) * ratio).round().max(1.0) as u32)
    } else {
        let ratio = max_dim as f64 / height as f64;
        (((width as f64) * ratio).round().max(1.0) as u32, max_dim)
    }
}

/// Encode image as JPEG
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
fn encode_jpeg(img: &DynamicImage) -> Result<Bytes> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);

    rgb.write_to(&mut cursor, ImageOutputFormat::Jpeg(JPEG_QUALITY))
        .map_err(|e| AppError::Encode(e.to_string()))?;

    if buf.is_empty() {
        return Err(AppError::Encode("encoder produced no output".to_string()));
    }

    Ok(Bytes::from(buf))
}
