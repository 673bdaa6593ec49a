use crate::error::{AppError, Result};

/// Key prefix thumbnails are written under
pub const THUMBNAILS_PREFIX: &str = "thumbnails";

/// Derive the thumbnail key for an uploaded object
///
/// The first path segment is replaced with `thumbnails`; everything from the
/// first `/` onwards is kept verbatim, so `uploads/2024/a.png` maps to
/// `thumbnails/2024/a.png`. Keys without a `/` are rejected.
pub fn thumbnail_key(source_key: &str) -> Result<String> {
    let separator = source_key.find('/').ok_or_else(|| {
        AppError::KeyDerivation(format!("key has no path separator: {}", source_key))
    })?;

    Ok(format!("{}{}", THUMBNAILS_PREFIX, &source_key[separator..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_first_segment() {
        assert_eq!(
            thumbnail_key("uploads/photo.png").unwrap(),
            "thumbnails/photo.png"
        );
    }

    #[test]
    fn test_keeps_nested_suffix_verbatim() {
        assert_eq!(
            thumbnail_key("users/42/albums/my photo.JPG").unwrap(),
            "thumbnails/42/albums/my photo.JPG"
        );
    }

    #[test]
    fn test_leading_slash_gets_prefix() {
        assert_eq!(thumbnail_key("/photo.png").unwrap(), "thumbnails/photo.png");
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(thumbnail_key("uploads/").unwrap(), "thumbnails/");
    }

    #[test]
    fn test_multibyte_first_segment() {
        assert_eq!(
            thumbnail_key("写真/猫.png").unwrap(),
            "thumbnails/猫.png"
        );
    }

    #[test]
    fn test_key_without_separator_is_rejected() {
        let err = thumbnail_key("photo.png").unwrap_err();
        assert!(matches!(err, AppError::KeyDerivation(_)));
    }

    #[test]
    fn test_output_always_has_prefix_and_suffix() {
        for key in ["a/b", "uploads/x/y/z.gif", "thumbnails/already.png", "//double"] {
            let out = thumbnail_key(key).unwrap();
            let suffix = &key[key.find('/').unwrap()..];
            assert!(out.starts_with("thumbnails/"), "{out}");
            assert!(out.ends_with(suffix), "{out}");
            assert_eq!(out.len(), THUMBNAILS_PREFIX.len() + suffix.len());
        }
    }
}
