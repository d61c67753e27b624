pub mod media;
pub mod watchlist;
pub mod profile;
pub mod library;
pub mod outcome;

pub use media::MediaType;
pub use watchlist::WatchlistEntry;
pub use profile::QualityProfile;
pub use library::{NewMovie, NewSeries, SeriesLookup};
pub use outcome::ItemOutcome;
