use async_trait::async_trait;
use plexarr_models::{NewMovie, QualityProfile};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::arr::base::BaseArrClient;
use crate::error::ClientError;
use crate::traits::MovieLibrary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddMovieRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u32>,
    quality_profile_id: i64,
    tmdb_id: u64,
    root_folder_path: &'a str,
    monitored: bool,
    add_options: AddMovieOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddMovieOptions {
    search_for_movie: bool,
}

pub struct RadarrClient {
    base: BaseArrClient,
    root_folder: String,
}

impl RadarrClient {
    pub fn new(base_url: &str, api_key: &str, root_folder: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        Ok(Self {
            base: BaseArrClient::new("radarr", base_url, api_key, timeout)?,
            root_folder: root_folder.to_string(),
        })
    }
}

#[async_trait]
impl MovieLibrary for RadarrClient {
    async fn quality_profiles(&self) -> Result<Vec<QualityProfile>, ClientError> {
        let profiles: Vec<QualityProfile> = self.base.get_json("/qualityProfile", &[] as &[(&str, &str)]).await?;
        debug!("{} returned {} quality profiles", self.base.service(), profiles.len());
        Ok(profiles)
    }

    async fn add_movie(&self, movie: &NewMovie) -> Result<(), ClientError> {
        let request = AddMovieRequest {
            title: &movie.title,
            year: movie.year,
            quality_profile_id: movie.quality_profile_id,
            tmdb_id: movie.tmdb_id,
            root_folder_path: &self.root_folder,
            monitored: true,
            add_options: AddMovieOptions { search_for_movie: true },
        };

        self.base.post_created("/movie", &request).await?;
        info!(tmdb_id = movie.tmdb_id, "Added movie '{}' to Radarr", movie.title);
        Ok(())
    }
}
