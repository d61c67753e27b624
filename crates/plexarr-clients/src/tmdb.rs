use async_trait::async_trait;
use plexarr_models::MediaType;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::ClientError;
use crate::traits::MetadataLookup;

const SERVICE: &str = "tmdb";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: u64,
}

pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::request(SERVICE))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn search_path(media_type: &MediaType) -> &'static str {
        match media_type {
            MediaType::Show => "/search/tv",
            _ => "/search/movie",
        }
    }

    /// No ranking of our own: the first hit TMDB returns wins
    pub async fn search(
        &self,
        title: &str,
        media_type: &MediaType,
        year: Option<u32>,
    ) -> Result<Option<u64>, ClientError> {
        let url = format!("{}{}", self.base_url, Self::search_path(media_type));

        let mut query = vec![("api_key", self.api_key.clone()), ("query", title.to_string())];
        if let Some(year) = year {
            query.push(("year", year.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response.json().await.map_err(transport_error)?;
        let id = body.results.first().map(|result| result.id);
        debug!(title, media_type = %media_type, ?year, ?id, "TMDB search finished");
        Ok(id)
    }
}

/// The api key travels in the query string, so the URL stays out of errors
fn transport_error(source: reqwest::Error) -> ClientError {
    ClientError::Request {
        service: SERVICE,
        source: source.without_url(),
    }
}

#[async_trait]
impl MetadataLookup for TmdbClient {
    async fn search_id(
        &self,
        title: &str,
        media_type: &MediaType,
        year: Option<u32>,
    ) -> Result<Option<u64>, ClientError> {
        self.search(title, media_type, year).await
    }
}
