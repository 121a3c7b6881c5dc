//! Teestudio - T-shirt mockup core with live pattern textures
//!
//! This is the library crate behind the mockup shell: it generates the
//! repeating surface texture for the 3D viewport and ranks the designer
//! catalog against free-text queries. Rendering and DOM wiring live in the
//! host shell, not here.

pub mod directory;
pub mod error;
pub mod pattern;
pub mod texture;

pub use error::StudioError;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for the host shell
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teestudio=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("teestudio initializing...");
}
