use plexarr_clients::MovieLibrary;
use plexarr_models::QualityProfile;
use tracing::{debug, error};

use crate::error::SyncError;

/// Resolve the quality profile id once per run. A missing profile is a
/// configuration error: nothing gets added with a made-up id.
pub async fn resolve_quality_profile(movies: &dyn MovieLibrary, name: &str) -> Result<i64, SyncError> {
    let profiles = movies.quality_profiles().await.map_err(|source| {
        error!(error = %source, "Failed to retrieve quality profiles");
        SyncError::QualityProfiles { source }
    })?;

    match QualityProfile::find_by_name(&profiles, name) {
        Some(profile) => {
            debug!(profile = %profile.name, id = profile.id, "Resolved quality profile");
            Ok(profile.id)
        }
        None => Err(SyncError::QualityProfileNotFound {
            name: name.to_string(),
            available: profiles.into_iter().map(|p| p.name).collect(),
        }),
    }
}
