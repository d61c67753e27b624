pub mod api;
pub mod parser;

pub use api::PlexHttpClient;
pub use parser::parse_watchlist;
