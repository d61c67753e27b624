use chrono::{DateTime, Utc};
use plexarr_models::{ItemOutcome, MediaType};
use serde::Serialize;
use std::time::Duration;

/// Outcome of one watchlist entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryReport {
    pub title: String,
    pub year: Option<u32>,
    pub media_type: MediaType,
    pub outcome: ItemOutcome,
}

/// Result of a full run, entries in watchlist order
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    #[serde(skip)]
    pub duration: Duration,
    pub dry_run: bool,
    pub entries: Vec<EntryReport>,
}

impl SyncReport {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn added(&self) -> usize {
        self.count(|o| o.is_added())
    }

    pub fn pruned(&self) -> usize {
        self.count(|o| o.is_pruned())
    }

    pub fn failed(&self) -> usize {
        self.count(|o| o.is_failure())
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped { .. }))
    }

    pub fn would_add(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::DryRun { .. }))
    }

    fn count(&self, predicate: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.outcome)).count()
    }
}
