use serde::{Deserialize, Serialize};
use crate::media::MediaType;

/// One item on the Plex watchlist. Fetched fresh on every run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub title: String,
    pub year: Option<u32>,
    /// e.g. `plex://movie/5d776825880197001ec967c6`
    pub guid: String,
    pub media_type: MediaType,
}

impl WatchlistEntry {
    /// The Plex rating key, taken from the last path segment of the guid.
    ///
    /// Segments of the form `ratingKey=12345` yield `12345`.
    pub fn rating_key(&self) -> Option<&str> {
        let segment = self.guid.rsplit('/').next().unwrap_or_default();
        let key = segment.strip_prefix("ratingKey=").unwrap_or(segment);
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    /// `Title (Year)`, or just the title when Plex sent no year
    pub fn label(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(guid: &str) -> WatchlistEntry {
        WatchlistEntry {
            title: "Dune (2021)".to_string(),
            year: Some(2021),
            guid: guid.to_string(),
            media_type: MediaType::Movie,
        }
    }

    #[test]
    fn test_rating_key_from_plex_guid() {
        let item = entry("plex://movie/5d776825880197001ec967c6");
        assert_eq!(item.rating_key(), Some("5d776825880197001ec967c6"));
    }

    #[test]
    fn test_rating_key_strips_query_style_segment() {
        let item = entry("plex://library/metadata/ratingKey=12345");
        assert_eq!(item.rating_key(), Some("12345"));
    }

    #[test]
    fn test_rating_key_without_slash_is_whole_guid() {
        assert_eq!(entry("67890").rating_key(), Some("67890"));
    }

    #[test]
    fn test_rating_key_missing() {
        assert_eq!(entry("").rating_key(), None);
        assert_eq!(entry("plex://movie/").rating_key(), None);
    }

    #[test]
    fn test_label() {
        let mut item = entry("plex://movie/1");
        assert_eq!(item.label(), "Dune (2021) (2021)");
        item.year = None;
        assert_eq!(item.label(), "Dune (2021)");
    }
}
