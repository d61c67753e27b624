use async_trait::async_trait;
use plexarr_models::{MediaType, NewMovie, NewSeries, QualityProfile, SeriesLookup, WatchlistEntry};
use crate::error::ClientError;

/// The media server side: where entries come from and are pruned from
#[async_trait]
pub trait WatchlistSource: Send + Sync {
    /// Shows first, then movies, each in server order
    async fn fetch_watchlist(&self) -> Result<Vec<WatchlistEntry>, ClientError>;

    async fn remove_from_watchlist(&self, rating_key: &str) -> Result<(), ClientError>;
}

#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// First search hit's id, `None` when the search came back empty
    async fn search_id(
        &self,
        title: &str,
        media_type: &MediaType,
        year: Option<u32>,
    ) -> Result<Option<u64>, ClientError>;
}

#[async_trait]
pub trait MovieLibrary: Send + Sync {
    async fn quality_profiles(&self) -> Result<Vec<QualityProfile>, ClientError>;

    /// Add a monitored movie and start searching for it. Ok only on 201.
    async fn add_movie(&self, movie: &NewMovie) -> Result<(), ClientError>;
}

#[async_trait]
pub trait SeriesLibrary: Send + Sync {
    /// First result of the backend's own lookup
    async fn lookup_series(&self, term: &str) -> Result<Option<SeriesLookup>, ClientError>;

    /// Add a monitored series and search for missing episodes. Ok only on 201.
    async fn add_series(&self, series: &NewSeries) -> Result<(), ClientError>;

    /// Look the term up in the backend's id space and add the first match,
    /// under the title the lookup reports.
    async fn search_and_add_series(
        &self,
        term: &str,
        year: Option<u32>,
        quality_profile_id: i64,
    ) -> Result<SeriesLookup, ClientError> {
        let found = self.lookup_series(term).await?.ok_or_else(|| ClientError::NotFound {
            service: "sonarr",
            term: term.to_string(),
        })?;

        let series = found.clone().into_new_series(year, quality_profile_id);
        self.add_series(&series).await?;
        Ok(found)
    }
}
