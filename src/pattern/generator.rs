//! Pattern rasterizer
//!
//! Draws the four pattern kinds into a fresh RGBA buffer. The canvas is
//! always filled with the primary color first, then the secondary color is
//! overlaid per kind. Band and cell boundaries are fractional at 512px
//! (25.6 and 51.2), so edges round to the nearest pixel; adjacent check
//! cells therefore tile with no gaps or overlaps.

use rand::Rng;

use super::dots::sample_dots;
use super::types::{PatternImage, PatternKind, PatternSpec, Rgb, TEXTURE_SIZE};

/// Number of horizontal stripe bands
const STRIPE_BANDS: u32 = 20;

/// Checkerboard grid size (cells per side)
const CHECK_CELLS: u32 = 10;

/// Generate the texture for a pattern spec using the thread RNG.
///
/// Only the dots kind consumes randomness; the other kinds are fully
/// deterministic in the spec.
pub fn generate(spec: &PatternSpec) -> PatternImage {
    generate_with_rng(spec, &mut rand::thread_rng())
}

/// Generate with a caller-supplied RNG, for reproducible dot placement
pub fn generate_with_rng<R: Rng>(spec: &PatternSpec, rng: &mut R) -> PatternImage {
    tracing::debug!("generating {} pattern texture", spec.kind.name());

    let mut image = PatternImage::filled(spec.primary);

    match spec.kind {
        PatternKind::Solid => {}
        PatternKind::Stripes => draw_stripes(&mut image, spec.secondary),
        PatternKind::Checks => draw_checks(&mut image, spec.secondary),
        PatternKind::Dots => {
            for dot in sample_dots(rng) {
                fill_circle(&mut image, dot.x, dot.y, dot.radius, spec.secondary);
            }
        }
    }

    image
}

/// 20 equal bands; the top half of each band is the stripe, the bottom half
/// stays background
fn draw_stripes(image: &mut PatternImage, color: Rgb) {
    let band = TEXTURE_SIZE as f32 / STRIPE_BANDS as f32;
    for i in 0..STRIPE_BANDS {
        let top = i as f32 * band;
        fill_rect(image, 0.0, top, TEXTURE_SIZE as f32, band / 2.0, color);
    }
}

/// 10x10 checkerboard; cell (i, j) is filled iff i + j is even
fn draw_checks(image: &mut PatternImage, color: Rgb) {
    let cell = TEXTURE_SIZE as f32 / CHECK_CELLS as f32;
    for i in 0..CHECK_CELLS {
        for j in 0..CHECK_CELLS {
            if (i + j) % 2 == 0 {
                fill_rect(image, i as f32 * cell, j as f32 * cell, cell, cell, color);
            }
        }
    }
}

/// Axis-aligned fill; fractional edges round to the nearest pixel
fn fill_rect(image: &mut PatternImage, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
    let limit = TEXTURE_SIZE as f32;
    let x0 = x.round().clamp(0.0, limit) as u32;
    let y0 = y.round().clamp(0.0, limit) as u32;
    let x1 = (x + width).round().clamp(0.0, limit) as u32;
    let y1 = (y + height).round().clamp(0.0, limit) as u32;

    for py in y0..y1 {
        for px in x0..x1 {
            image.set_pixel(px, py, color);
        }
    }
}

/// Filled circle, clipped at the canvas edges
fn fill_circle(image: &mut PatternImage, cx: f32, cy: f32, radius: f32, color: Rgb) {
    let extent = radius.ceil() as i32 + 1;
    let left = (cx as i32 - extent).max(0) as u32;
    let top = (cy as i32 - extent).max(0) as u32;
    let right = (cx as i32 + extent + 1).min(TEXTURE_SIZE as i32) as u32;
    let bottom = (cy as i32 + extent + 1).min(TEXTURE_SIZE as i32) as u32;

    let r2 = radius * radius;
    for py in top..bottom {
        for px in left..right {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                image.set_pixel(px, py, color);
            }
        }
    }
}
