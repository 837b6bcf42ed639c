pub mod album;
pub mod error;
pub mod title;
pub mod year;

// Re-export commonly used types
pub use album::{sort_by_release_year, AlbumData, AlbumRecord, AlbumView};
pub use error::CoreError;
pub use title::normalize_title;
pub use year::ReleaseYear;
