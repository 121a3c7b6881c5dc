//! Query scoring and ranking

use super::types::DesignerProfile;

/// Half-weight bonus for a name/bio text hit
const TEXT_MATCH_BONUS: f32 = 0.5;

/// Rank `catalog` against a free-text query.
///
/// An empty or whitespace-only query returns the default listing: the first
/// `max_results` catalog entries in catalog order. Otherwise each profile is
/// scored (+1 per style tag where tag and query contain each other in either
/// direction, +0.5 for a name/bio substring hit), zero-score profiles are
/// dropped, and the rest are ordered by score descending, rating descending,
/// then original catalog order.
pub fn recommend(
    catalog: &[DesignerProfile],
    query: &str,
    max_results: usize,
) -> Vec<DesignerProfile> {
    let query = query.trim();
    if query.is_empty() {
        return catalog.iter().take(max_results).cloned().collect();
    }

    let needle = query.to_lowercase();
    tracing::debug!("ranking {} designers for {:?}", catalog.len(), needle);

    let mut scored: Vec<(f32, &DesignerProfile)> = catalog
        .iter()
        .filter_map(|profile| {
            let score = score_profile(profile, &needle);
            (score > 0.0).then_some((score, profile))
        })
        .collect();

    // Stable sort keeps catalog order for full ties on score and rating
    scored.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then(b.1.rating.total_cmp(&a.1.rating))
    });

    scored
        .into_iter()
        .take(max_results)
        .map(|(_, profile)| profile.clone())
        .collect()
}

/// Symmetric containment over style tags plus a half-weight name/bio hit.
/// `needle` must already be trimmed and lowercased.
fn score_profile(profile: &DesignerProfile, needle: &str) -> f32 {
    let tag_hits = profile
        .styles
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            tag.contains(needle) || needle.contains(tag.as_str())
        })
        .count();

    let text = format!("{} {}", profile.name, profile.bio).to_lowercase();
    let text_bonus = if text.contains(needle) {
        TEXT_MATCH_BONUS
    } else {
        0.0
    };

    tag_hits as f32 + text_bonus
}
