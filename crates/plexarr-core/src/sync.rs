use chrono::Utc;
use futures::stream::{self, StreamExt};
use plexarr_clients::{ClientError, Services};
use plexarr_models::{ItemOutcome, MediaType, NewMovie, WatchlistEntry};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::error::SyncError;
use crate::profile::resolve_quality_profile;
use crate::report::{EntryReport, SyncReport};
use crate::title::clean_title;


/// Restrict a run to one kind of entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFilter {
    Movies,
    Shows,
}

#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Resolve ids but send no add or remove requests
    pub dry_run: bool,
    /// Entries in flight at once; 1 means strictly one after another
    pub concurrency: usize,
    pub only: Option<MediaFilter>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            concurrency: 1,
            only: None,
        }
    }
}

pub struct SyncOrchestrator {
    services: Services,
    quality_profile_name: String,
    options: SyncOptions,
}

impl SyncOrchestrator {
    pub fn new(services: Services, quality_profile_name: impl Into<String>) -> Self {
        Self {
            services,
            quality_profile_name: quality_profile_name.into(),
            options: SyncOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch the watchlist and push every entry to Radarr or Sonarr.
    ///
    /// Only a failed watchlist fetch or an unusable quality profile ends the
    /// run early. Everything that goes wrong for a single entry lands in the
    /// report and the run moves on.
    #[instrument(skip(self), fields(dry_run = self.options.dry_run))]
    pub async fn sync(&self) -> Result<SyncReport, SyncError> {
        let started_at = Utc::now();
        let started = Instant::now();
        info!("Starting sync...");

        let watchlist = self
            .services
            .watchlist
            .fetch_watchlist()
            .await
            .map_err(|source| SyncError::Watchlist { source })?;
        info!("Found {} items in Plex watchlist", watchlist.len());

        let entries = if watchlist.is_empty() {
            Vec::new()
        } else {
            let quality_profile_id =
                resolve_quality_profile(self.services.movies.as_ref(), &self.quality_profile_name).await?;

            info!("Processing Plex watchlist...");
            stream::iter(watchlist)
                .map(|entry| self.process_entry(entry, quality_profile_id))
                .buffered(self.options.concurrency.max(1))
                .collect::<Vec<_>>()
                .await
        };

        let report = SyncReport {
            started_at,
            duration: started.elapsed(),
            dry_run: self.options.dry_run,
            entries,
        };

        info!(
            total = report.total(),
            added = report.added(),
            pruned = report.pruned(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Sync finished in {:?}",
            report.duration
        );
        Ok(report)
    }

    async fn process_entry(&self, entry: WatchlistEntry, quality_profile_id: i64) -> EntryReport {
        let outcome = match &entry.media_type {
            kind if !self.is_selected(kind) => {
                debug!("Skipping {} '{}' (filtered out)", kind, entry.title);
                ItemOutcome::Skipped {
                    reason: format!("{} filtered out", kind),
                }
            }
            MediaType::Movie => self.process_movie(&entry, quality_profile_id).await,
            MediaType::Show => self.process_show(&entry, quality_profile_id).await,
            MediaType::Other(kind) => {
                warn!("Unknown media type found: {}", kind);
                ItemOutcome::Skipped {
                    reason: format!("unknown media type '{}'", kind),
                }
            }
        };

        EntryReport {
            title: entry.title,
            year: entry.year,
            media_type: entry.media_type,
            outcome,
        }
    }

    fn is_selected(&self, media_type: &MediaType) -> bool {
        !matches!(
            (self.options.only, media_type),
            (Some(MediaFilter::Movies), MediaType::Show) | (Some(MediaFilter::Shows), MediaType::Movie)
        )
    }

    async fn process_movie(&self, entry: &WatchlistEntry, quality_profile_id: i64) -> ItemOutcome {
        let Some(tmdb_id) = self.resolve_metadata_id(entry).await else {
            return ItemOutcome::Unresolved;
        };

        if self.options.dry_run {
            info!("Dry run: would add movie '{}' to Radarr (tmdb:{})", entry.label(), tmdb_id);
            return ItemOutcome::DryRun { tmdb_id };
        }

        info!("Adding movie '{}' to Radarr...", entry.title);
        let movie = NewMovie {
            tmdb_id,
            title: entry.title.clone(),
            year: entry.year,
            quality_profile_id,
        };

        match self.services.movies.add_movie(&movie).await {
            Ok(()) => {
                info!("Added movie '{}' to Radarr successfully.", entry.label());
                ItemOutcome::Added {
                    pruned: self.prune(entry).await,
                }
            }
            Err(e) => {
                let reason = failure_reason(&e);
                warn!(error = %e, "Failed to add movie '{}' to Radarr. {}", entry.label(), reason);
                ItemOutcome::AddFailed { reason }
            }
        }
    }

    /// The TMDB tv search only decides whether the show is processed; Sonarr's
    /// own lookup picks the series that is added. The entry is pruned only
    /// after Sonarr confirms the add.
    async fn process_show(&self, entry: &WatchlistEntry, quality_profile_id: i64) -> ItemOutcome {
        let Some(tmdb_id) = self.resolve_metadata_id(entry).await else {
            return ItemOutcome::Unresolved;
        };

        if self.options.dry_run {
            // lookup is read-only, so dry runs still ask Sonarr
            let lookup = self.services.series.lookup_series(&entry.title).await.and_then(|found| {
                found.ok_or_else(|| ClientError::NotFound {
                    service: "sonarr",
                    term: entry.title.clone(),
                })
            });
            return match lookup {
                Ok(series) => {
                    info!(tvdb_id = series.tvdb_id, "Dry run: would add series '{}' to Sonarr", series.title);
                    ItemOutcome::DryRun { tmdb_id }
                }
                Err(e) => {
                    let reason = failure_reason(&e);
                    warn!(error = %e, "Dry run: Sonarr lookup failed for '{}'. {}", entry.label(), reason);
                    ItemOutcome::AddFailed { reason }
                }
            };
        }

        info!("Adding series '{}' to Sonarr...", entry.label());
        match self
            .services
            .series
            .search_and_add_series(&entry.title, entry.year, quality_profile_id)
            .await
        {
            Ok(series) => {
                info!(tvdb_id = series.tvdb_id, "Added series '{}' to Sonarr successfully.", series.title);
                ItemOutcome::Added {
                    pruned: self.prune(entry).await,
                }
            }
            Err(e) => {
                let reason = failure_reason(&e);
                warn!(error = %e, "Failed to add series '{}' to Sonarr. {}", entry.label(), reason);
                ItemOutcome::AddFailed { reason }
            }
        }
    }

    async fn resolve_metadata_id(&self, entry: &WatchlistEntry) -> Option<u64> {
        let search_title = clean_title(&entry.title);
        match self
            .services
            .metadata
            .search_id(&search_title, &entry.media_type, entry.year)
            .await
        {
            Ok(Some(id)) => {
                debug!(tmdb_id = id, search = %search_title, "Resolved TMDB ID for {} '{}'", entry.media_type, entry.title);
                Some(id)
            }
            Ok(None) => {
                warn!("No TMDB ID found for {} '{}'", entry.media_type, entry.title);
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve TMDB ID for {} '{}'", entry.media_type, entry.title);
                None
            }
        }
    }

    /// Remove the entry from the Plex watchlist. Returns whether it worked;
    /// a failed removal is retried naturally on the next run.
    async fn prune(&self, entry: &WatchlistEntry) -> bool {
        let Some(rating_key) = entry.rating_key() else {
            warn!(guid = %entry.guid, "No rating key in guid, cannot remove '{}' from watchlist", entry.title);
            return false;
        };

        match self.services.watchlist.remove_from_watchlist(rating_key).await {
            Ok(()) => {
                debug!(rating_key, "Removed '{}' from Plex watchlist", entry.title);
                true
            }
            Err(e) => {
                warn!(error = %e, rating_key, "Failed to remove item from watchlist");
                false
            }
        }
    }
}

/// Backend message when there is one, otherwise the status code
fn failure_reason(error: &ClientError) -> String {
    match error {
        ClientError::Rejected { message, .. } => format!("Error: {}", message),
        ClientError::Status { status, .. } => format!("Status Code: {}", status),
        other => other.to_string(),
    }
}
