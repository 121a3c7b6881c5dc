//! Designer directory module
//!
//! Ranks the static designer catalog against a free-text style query:
//! - symmetric substring containment over style tags
//! - name/bio text match as a half-weight bonus
//! - stable ordering by score, then rating, then catalog order

pub mod catalog;
pub mod recommend;
pub mod types;

pub use catalog::{builtin_catalog, load_catalog};
pub use recommend::recommend;
pub use types::DesignerProfile;
