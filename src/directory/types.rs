//! Designer profile types

use serde::{Deserialize, Serialize};

/// A designer in the catalog.
///
/// The catalog is seed data: profiles are never created or destroyed at
/// runtime, and recommendation never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerProfile {
    /// Unique identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Style tags, most representative first
    pub styles: Vec<String>,
    /// Short self-description shown on the card
    pub bio: String,
    /// Average customer rating in [0, 5]
    pub rating: f32,
    /// Avatar asset path, resolved by the UI shell
    pub avatar: String,
}
