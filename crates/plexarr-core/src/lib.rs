pub mod sync;
pub mod title;
pub mod profile;
pub mod report;
pub mod error;

pub use sync::{MediaFilter, SyncOptions, SyncOrchestrator};
pub use title::clean_title;
pub use profile::resolve_quality_profile;
pub use report::{EntryReport, SyncReport};
pub use error::SyncError;
