use plexarr_clients::ClientError;
use thiserror::Error;

/// Errors that end a run. Per-entry failures are recorded in the report instead.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to fetch the Plex watchlist: {source}")]
    Watchlist {
        #[source]
        source: ClientError,
    },

    #[error("failed to list Radarr quality profiles: {source}")]
    QualityProfiles {
        #[source]
        source: ClientError,
    },

    #[error("quality profile '{name}' not found in Radarr (available: {})", available.join(", "))]
    QualityProfileNotFound { name: String, available: Vec<String> },
}
