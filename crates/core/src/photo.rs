//! Uploaded photo validation.
//!
//! Photos (clock-in/out captures and employee portraits) are stored as
//! opaque files; validation here is limited to a size ceiling and a header
//! sniff confirming the bytes are a decodable image format.

use image::ImageFormat;

/// Maximum accepted upload size: 2 MiB.
pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

/// Image formats accepted for photo uploads.
pub const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Validate uploaded photo bytes, returning the detected format.
///
/// Rejects empty uploads, anything above [`MAX_PHOTO_BYTES`], and bytes
/// whose magic number is not one of [`ACCEPTED_FORMATS`].
pub fn validate_photo(bytes: &[u8]) -> Result<ImageFormat, String> {
    if bytes.is_empty() {
        return Err("Photo upload is empty".to_string());
    }
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(format!(
            "Photo exceeds maximum size of {} bytes (got {})",
            MAX_PHOTO_BYTES,
            bytes.len()
        ));
    }
    let format = image::guess_format(bytes)
        .map_err(|_| "Photo is not a recognized image format".to_string())?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(format!(
            "Image format {format:?} is not accepted; use JPEG, PNG, GIF, or WebP"
        ));
    }
    Ok(format)
}

/// File extension for a stored photo of the given format.
pub fn extension_for(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpg",
        ImageFormat::Png => "png",
        ImageFormat::Gif => "gif",
        ImageFormat::WebP => "webp",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal valid PNG header (magic + IHDR start).
    const PNG_MAGIC: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52,
    ];

    /// JPEG SOI marker followed by an APP0 segment start.
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

    #[test]
    fn png_bytes_accepted() {
        assert_eq!(validate_photo(PNG_MAGIC).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn jpeg_bytes_accepted() {
        assert_eq!(validate_photo(JPEG_MAGIC).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn empty_upload_rejected() {
        let result = validate_photo(&[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("empty"));
    }

    #[test]
    fn oversized_upload_rejected() {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.resize(MAX_PHOTO_BYTES + 1, 0);
        let result = validate_photo(&bytes);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("maximum size"));
    }

    #[test]
    fn text_bytes_rejected() {
        let result = validate_photo(b"definitely not an image");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not a recognized image format"));
    }

    #[test]
    fn extensions_match_formats() {
        assert_eq!(extension_for(ImageFormat::Jpeg), "jpg");
        assert_eq!(extension_for(ImageFormat::Png), "png");
        assert_eq!(extension_for(ImageFormat::WebP), "webp");
    }
}
