use async_trait::async_trait;
use plexarr_models::{NewSeries, SeriesLookup};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::arr::base::BaseArrClient;
use crate::error::ClientError;
use crate::traits::SeriesLibrary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSeriesRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u32>,
    quality_profile_id: i64,
    language_profile_id: i64,
    tvdb_id: u64,
    root_folder_path: &'a str,
    monitored: bool,
    add_options: AddSeriesOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSeriesOptions {
    search_for_missing_episodes: bool,
}

pub struct SonarrClient {
    base: BaseArrClient,
    root_folder: String,
    language_profile_id: i64,
}

impl SonarrClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        root_folder: &str,
        language_profile_id: i64,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            base: BaseArrClient::new("sonarr", base_url, api_key, timeout)?,
            root_folder: root_folder.to_string(),
            language_profile_id,
        })
    }
}

#[async_trait]
impl SeriesLibrary for SonarrClient {
    async fn lookup_series(&self, term: &str) -> Result<Option<SeriesLookup>, ClientError> {
        let results: Vec<SeriesLookup> = self.base.get_json("/series/lookup", &[("term", term)]).await?;
        debug!(term, results = results.len(), "Sonarr series lookup finished");
        Ok(results.into_iter().next())
    }

    async fn add_series(&self, series: &NewSeries) -> Result<(), ClientError> {
        let request = AddSeriesRequest {
            title: &series.title,
            year: series.year,
            quality_profile_id: series.quality_profile_id,
            language_profile_id: self.language_profile_id,
            tvdb_id: series.tvdb_id,
            root_folder_path: &self.root_folder,
            monitored: true,
            add_options: AddSeriesOptions {
                search_for_missing_episodes: true,
            },
        };

        self.base.post_created("/series", &request).await?;
        info!(tvdb_id = series.tvdb_id, "Added series '{}' to Sonarr", series.title);
        Ok(())
    }
}
