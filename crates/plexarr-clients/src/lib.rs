pub mod traits;
pub mod error;
pub mod factory;
pub mod plex;
pub mod tmdb;
pub mod arr;

pub use traits::{MetadataLookup, MovieLibrary, SeriesLibrary, WatchlistSource};
pub use error::ClientError;
pub use factory::Services;
pub use plex::PlexHttpClient;
pub use tmdb::TmdbClient;
pub use arr::{RadarrClient, SonarrClient};
