use serde::{Deserialize, Serialize};

/// Radarr quality profile, as listed by `GET /api/v3/qualityProfile`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualityProfile {
    pub id: i64,
    pub name: String,
}

impl QualityProfile {
    /// Exact, case-sensitive name match
    pub fn find_by_name<'a>(profiles: &'a [QualityProfile], name: &str) -> Option<&'a QualityProfile> {
        profiles.iter().find(|profile| profile.name == name)
    }
}
