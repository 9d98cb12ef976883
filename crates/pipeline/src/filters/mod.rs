//! Filter implementations for the query pipeline.
//!
//! Each stage comes as a `Filter` type (for composing a `FilterPipeline`)
//! and a free function that applies it to a slice on its own.

pub mod director;
pub mod genre;
pub mod search;
pub mod watched;
pub mod year;

// Re-export for convenience
pub use director::{filter_by_director, DirectorFilter};
pub use genre::{filter_by_genre, GenreFilter};
pub use search::{search_movies, SearchFilter};
pub use watched::{filter_by_watched_status, WatchStatus, WatchedFilter};
pub use year::{filter_by_year, YearRangeFilter};
