//! Builtin seed catalog and catalog loading

use super::types::DesignerProfile;
use crate::error::StudioError;

/// The four demo designers shipped with the mockup
pub fn builtin_catalog() -> Vec<DesignerProfile> {
    vec![
        profile(
            1,
            "陳小白",
            &["極簡", "中性"],
            "善於簡約剪裁與永續面料",
            4.8,
            "assets/designer1.jpg",
        ),
        profile(
            2,
            "李設計",
            &["街頭", "印花"],
            "大膽用色與印花設計",
            4.6,
            "assets/designer2.jpg",
        ),
        profile(
            3,
            "王復古",
            &["復古", "手作"],
            "擅長復古元素與洗舊處理",
            4.7,
            "assets/designer3.jpg",
        ),
        profile(
            4,
            "吳可愛",
            &["可愛", "插畫"],
            "插畫印花、年輕市場專家",
            4.5,
            "assets/designer4.jpg",
        ),
    ]
}

/// Parse a caller-supplied catalog from JSON
pub fn load_catalog(json: &str) -> Result<Vec<DesignerProfile>, StudioError> {
    let catalog: Vec<DesignerProfile> = serde_json::from_str(json)?;
    tracing::debug!("loaded catalog with {} designers", catalog.len());
    Ok(catalog)
}

fn profile(
    id: u32,
    name: &str,
    styles: &[&str],
    bio: &str,
    rating: f32,
    avatar: &str,
) -> DesignerProfile {
    DesignerProfile {
        id,
        name: name.to_string(),
        styles: styles.iter().map(|s| s.to_string()).collect(),
        bio: bio.to_string(),
        rating,
        avatar: avatar.to_string(),
    }
}
