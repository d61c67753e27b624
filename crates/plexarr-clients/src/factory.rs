use plexarr_config::Config;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::arr::{RadarrClient, SonarrClient};
use crate::error::ClientError;
use crate::plex::PlexHttpClient;
use crate::tmdb::TmdbClient;
use crate::traits::{MetadataLookup, MovieLibrary, SeriesLibrary, WatchlistSource};

/// The four services a sync talks to, behind their traits
#[derive(Clone)]
pub struct Services {
    pub watchlist: Arc<dyn WatchlistSource>,
    pub metadata: Arc<dyn MetadataLookup>,
    pub movies: Arc<dyn MovieLibrary>,
    pub series: Arc<dyn SeriesLibrary>,
}

impl Services {
    /// Build the HTTP clients for every service in `config`. No request is sent.
    pub fn from_config(config: &Config, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let credentials = &config.credentials;

        let plex = PlexHttpClient::new(&credentials.plex_token, &config.plex_url, timeout)?;
        let tmdb = TmdbClient::new(&credentials.tmdb_api_key, &config.tmdb_url, timeout)?;
        let radarr = RadarrClient::new(
            &config.radarr.url,
            &credentials.radarr_api_key,
            &config.radarr.root_folder,
            timeout,
        )?;
        let sonarr = SonarrClient::new(
            &config.sonarr.url,
            &credentials.sonarr_api_key,
            &config.sonarr.root_folder,
            config.language_profile_id,
            timeout,
        )?;

        debug!(?timeout, "Created Plex, TMDB, Radarr and Sonarr clients");

        Ok(Self {
            watchlist: Arc::new(plex),
            metadata: Arc::new(tmdb),
            movies: Arc::new(radarr),
            series: Arc::new(sonarr),
        })
    }
}
