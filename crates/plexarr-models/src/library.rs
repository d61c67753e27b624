use serde::{Deserialize, Serialize};

/// A movie to add to Radarr. The title is the watchlist title, uncleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub tmdb_id: u64,
    pub title: String,
    pub year: Option<u32>,
    pub quality_profile_id: i64,
}

/// A series to add to Sonarr, identified in Sonarr's own (TVDB) id space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeries {
    pub tvdb_id: u64,
    pub title: String,
    pub year: Option<u32>,
    pub quality_profile_id: i64,
}

/// One result of Sonarr's `GET /api/v3/series/lookup`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLookup {
    pub title: String,
    pub tvdb_id: u64,
    #[serde(default)]
    pub year: Option<u32>,
}

impl SeriesLookup {
    pub fn into_new_series(self, fallback_year: Option<u32>, quality_profile_id: i64) -> NewSeries {
        NewSeries {
            tvdb_id: self.tvdb_id,
            title: self.title,
            year: self.year.or(fallback_year),
            quality_profile_id,
        }
    }
}
