use async_trait::async_trait;
use plexarr_models::WatchlistEntry;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::ClientError;
use crate::plex::parser::parse_watchlist;
use crate::traits::WatchlistSource;

const SERVICE: &str = "plex";
const CLIENT_IDENTIFIER: &str = "plexarr";

pub struct PlexHttpClient {
    client: Client,
    discover_base_url: String,
}

impl PlexHttpClient {
    pub fn new(token: &str, discover_base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/xml"));
        headers.insert(
            HeaderName::from_static("x-plex-token"),
            HeaderValue::from_str(token).map_err(|e| ClientError::InvalidCredential {
                service: SERVICE,
                reason: e.to_string(),
            })?,
        );
        headers.insert(
            HeaderName::from_static("x-plex-client-identifier"),
            HeaderValue::from_static(CLIENT_IDENTIFIER),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::request(SERVICE))?;

        Ok(Self {
            client,
            discover_base_url: discover_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_watchlist(&self) -> Result<Vec<WatchlistEntry>, ClientError> {
        let url = format!("{}/library/sections/watchlist/all", self.discover_base_url);
        info!("Fetching Plex watchlist...");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::request(SERVICE))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(ClientError::request(SERVICE))?;
        let entries = parse_watchlist(&body)?;
        debug!("Plex watchlist: Returning {} items", entries.len());
        Ok(entries)
    }

    /// Anything but 200 counts as a failure, including "already removed"
    pub async fn remove_from_watchlist(&self, rating_key: &str) -> Result<(), ClientError> {
        let url = format!("{}/actions/removeFromWatchlist", self.discover_base_url);
        let response = self
            .client
            .put(&url)
            .query(&[("ratingKey", rating_key)])
            .send()
            .await
            .map_err(ClientError::request(SERVICE))?;

        if response.status() == StatusCode::OK {
            debug!(rating_key, "Removed item from Plex watchlist");
            Ok(())
        } else {
            Err(ClientError::Status {
                service: SERVICE,
                status: response.status().as_u16(),
            })
        }
    }
}

#[async_trait]
impl WatchlistSource for PlexHttpClient {
    async fn fetch_watchlist(&self) -> Result<Vec<WatchlistEntry>, ClientError> {
        self.get_watchlist().await
    }

    async fn remove_from_watchlist(&self, rating_key: &str) -> Result<(), ClientError> {
        PlexHttpClient::remove_from_watchlist(self, rating_key).await
    }
}
