//! Pattern texture module
//!
//! Produces the repeating surface texture for the mockup viewport:
//! - fixed 512x512 RGBA output, regenerated wholesale on every spec change
//! - four pattern kinds (solid, stripes, checks, dots)
//! - random dot placement with an injectable RNG for tests

pub mod dots;
pub mod generator;
pub mod types;

pub use dots::{sample_dots, Dot, DOT_COUNT};
pub use generator::{generate, generate_with_rng};
pub use types::{PatternImage, PatternKind, PatternSpec, Rgb, TEXTURE_SIZE};
