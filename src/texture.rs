//! Viewport texture bridge
//!
//! The mockup viewport consumes the generated pattern as a repeating surface
//! texture. This module packages a [`PatternImage`] for that hand-off:
//! raw PNG bytes, or a base64 data URL the shell can assign to an image
//! source directly.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use image::{ImageFormat, RgbaImage};

use crate::error::StudioError;
use crate::pattern::PatternImage;

/// Encode a pattern image as PNG bytes
pub fn encode_png(image: &PatternImage) -> Result<Vec<u8>, StudioError> {
    let rgba = RgbaImage::from_raw(image.width(), image.height(), image.as_bytes().to_vec())
        .ok_or_else(|| StudioError::InvalidInput("pattern buffer size mismatch".to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    rgba.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Encode a pattern image as a `data:image/png;base64,` URL
pub fn encode_data_url(image: &PatternImage) -> Result<String, StudioError> {
    let png = encode_png(image)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(png)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{generate, PatternKind, PatternSpec, Rgb, TEXTURE_SIZE};

    fn checks_image() -> PatternImage {
        generate(&PatternSpec::new(
            PatternKind::Checks,
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
        ))
    }

    #[test]
    fn test_encode_png_produces_valid_png() {
        let png = encode_png(&checks_image()).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), TEXTURE_SIZE);
        assert_eq!(decoded.height(), TEXTURE_SIZE);
    }

    #[test]
    fn test_encode_data_url_prefix() {
        let url = encode_data_url(&checks_image()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.len() > "data:image/png;base64,".len());
    }
}
