pub mod base;
pub mod radarr;
pub mod sonarr;

pub use base::rejection_message;
pub use radarr::RadarrClient;
pub use sonarr::SonarrClient;
