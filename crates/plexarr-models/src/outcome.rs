use serde::{Deserialize, Serialize};

/// What happened to a single watchlist entry during a sync run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// Added to Radarr/Sonarr. `pruned` is false when the watchlist removal failed.
    Added { pruned: bool },
    /// TMDB search failed or returned nothing
    Unresolved,
    /// The backend refused the add, or the request never completed
    AddFailed { reason: String },
    Skipped { reason: String },
    /// Resolved, but no add or remove request was sent
    DryRun { tmdb_id: u64 },
}

impl ItemOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, ItemOutcome::Added { .. })
    }

    pub fn is_pruned(&self) -> bool {
        matches!(self, ItemOutcome::Added { pruned: true })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ItemOutcome::Unresolved | ItemOutcome::AddFailed { .. })
    }

    pub fn summary(&self) -> String {
        match self {
            ItemOutcome::Added { pruned: true } => "added, removed from watchlist".to_string(),
            ItemOutcome::Added { pruned: false } => "added, still on watchlist".to_string(),
            ItemOutcome::Unresolved => "no TMDB match".to_string(),
            ItemOutcome::AddFailed { reason } => format!("add failed: {}", reason),
            ItemOutcome::Skipped { reason } => format!("skipped: {}", reason),
            ItemOutcome::DryRun { tmdb_id } => format!("would add (tmdb:{})", tmdb_id),
        }
    }
}
