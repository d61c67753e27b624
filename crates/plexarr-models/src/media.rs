use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a watchlist entry as reported by Plex (`type` attribute)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Show,
    /// Anything else Plex puts on a watchlist; the raw tag is kept for logging
    Other(String),
}

impl MediaType {
    pub fn from_plex_type(raw: &str) -> Self {
        match raw {
            "movie" => MediaType::Movie,
            "show" => MediaType::Show,
            other => MediaType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Show => "show",
            MediaType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
