//! Pattern spec and texture types

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Texture edge length in pixels, identical for every pattern kind
pub const TEXTURE_SIZE: u32 = 512;

/// Surface pattern kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PatternKind {
    /// Uniform primary fill, also the fallback for unrecognized names
    #[default]
    Solid,
    Stripes,
    Checks,
    Dots,
}

impl PatternKind {
    /// Resolve a kind name from the shell's pattern picker.
    ///
    /// Unknown names fall back to `Solid` rather than failing; the picker is
    /// free to grow entries the core does not know about yet.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "stripes" => Self::Stripes,
            "checks" => Self::Checks,
            "dots" => Self::Dots,
            _ => Self::Solid,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Stripes => "stripes",
            Self::Checks => "checks",
            Self::Dots => "dots",
        }
    }
}

impl From<String> for PatternKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string as submitted by a color picker input
    pub fn parse_hex(value: &str) -> Result<Self, StudioError> {
        let digits = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StudioError::InvalidInput(format!(
                "expected #rrggbb color, got {:?}",
                value
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<u8, StudioError> {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| StudioError::InvalidInput(format!("bad color channel: {}", e)))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Immutable description of a surface pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Pattern kind to draw
    pub kind: PatternKind,
    /// Background color, always painted first
    pub primary: Rgb,
    /// Overlay color for the pattern itself
    pub secondary: Rgb,
}

impl PatternSpec {
    pub const fn new(kind: PatternKind, primary: Rgb, secondary: Rgb) -> Self {
        Self {
            kind,
            primary,
            secondary,
        }
    }
}

/// A generated RGBA8 texture, always `TEXTURE_SIZE` x `TEXTURE_SIZE`.
///
/// Owned by whichever call site requested it; a new image is produced from
/// scratch on every spec change, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternImage {
    pixels: Vec<u8>,
}

impl PatternImage {
    /// Create a texture filled with a single color
    pub fn filled(color: Rgb) -> Self {
        let count = (TEXTURE_SIZE * TEXTURE_SIZE) as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        TEXTURE_SIZE
    }

    pub fn height(&self) -> u32 {
        TEXTURE_SIZE
    }

    /// Raw straight-alpha RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one pixel's color (alpha is always opaque)
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = ((y * TEXTURE_SIZE + x) * 4) as usize;
        Rgb::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = ((y * TEXTURE_SIZE + x) * 4) as usize;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_known_names() {
        assert_eq!(PatternKind::parse("stripes"), PatternKind::Stripes);
        assert_eq!(PatternKind::parse(" Checks "), PatternKind::Checks);
        assert_eq!(PatternKind::parse("DOTS"), PatternKind::Dots);
        assert_eq!(PatternKind::parse("solid"), PatternKind::Solid);
    }

    #[test]
    fn test_kind_parse_unknown_falls_back_to_solid() {
        assert_eq!(PatternKind::parse("zigzag"), PatternKind::Solid);
        assert_eq!(PatternKind::parse(""), PatternKind::Solid);
    }

    #[test]
    fn test_kind_deserialize_unknown_falls_back_to_solid() {
        let kind: PatternKind = serde_json::from_str("\"plaid\"").unwrap();
        assert_eq!(kind, PatternKind::Solid);

        let kind: PatternKind = serde_json::from_str("\"dots\"").unwrap();
        assert_eq!(kind, PatternKind::Dots);
    }

    #[test]
    fn test_rgb_parse_hex() {
        assert_eq!(Rgb::parse_hex("#ff0080").unwrap(), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::parse_hex("#FFFFFF").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::parse_hex("0b0e14").unwrap(), Rgb::new(11, 14, 20));
    }

    #[test]
    fn test_rgb_parse_hex_rejects_malformed() {
        assert!(Rgb::parse_hex("#fff").is_err());
        assert!(Rgb::parse_hex("#gggggg").is_err());
        assert!(Rgb::parse_hex("red").is_err());
        assert!(Rgb::parse_hex("").is_err());
    }

    #[test]
    fn test_spec_serde_round_trip() {
        let spec = PatternSpec::new(
            PatternKind::Checks,
            Rgb::new(230, 230, 230),
            Rgb::new(20, 60, 200),
        );
        let json = serde_json::to_string(&spec).unwrap();
        let back: PatternSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_filled_image_dimensions() {
        let image = PatternImage::filled(Rgb::new(1, 2, 3));
        assert_eq!(image.width(), TEXTURE_SIZE);
        assert_eq!(image.height(), TEXTURE_SIZE);
        assert_eq!(
            image.as_bytes().len(),
            (TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize
        );
        assert_eq!(image.pixel(0, 0), Rgb::new(1, 2, 3));
        assert_eq!(image.pixel(TEXTURE_SIZE - 1, TEXTURE_SIZE - 1), Rgb::new(1, 2, 3));
    }
}
