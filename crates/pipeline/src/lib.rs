//! Query pipeline for filtering, searching and sorting movie collections.
//!
//! This crate provides:
//! - Filter trait and one implementation per filter stage
//! - FilterPipeline for composing filters
//! - Stable sorting by title, year, rating or the user's own rating
//! - FilterCriteria and the composite `query` operation
//!
//! ## Architecture
//! Every stage takes a sequence and returns a new one; nothing here holds
//! state or touches the catalog store.
//! 1. Search and filters narrow the collection (order preserved)
//! 2. The sort orders whatever survived
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{query, FilterCriteria, SortBy, SortDirection, WatchStatus};
//!
//! let criteria = FilterCriteria::new()
//!     .with_genre("Drama")
//!     .with_watched(WatchStatus::Unwatched)
//!     .sorted_by(SortBy::Rating, SortDirection::Descending);
//!
//! let visible = query(store.fetch_all_movies(), &criteria);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod criteria;
pub mod facets;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use filters::{
    filter_by_director, filter_by_genre, filter_by_watched_status, filter_by_year, search_movies,
    WatchStatus,
};
pub use sort::{compare_movies, sort_movies, SortBy, SortDirection, UnknownSortOption};
pub use criteria::{query, FilterCriteria};
pub use facets::{unique_directors, unique_genres};

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::{Movie, MovieId};

    /// A neutral movie; tests override the fields they care about
    pub fn movie(id: MovieId) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            year: 2000,
            director: "Director".to_string(),
            genres: vec!["Drama".to_string()],
            rating: 7.0,
            description: String::new(),
            watched: false,
            user_rating: None,
            poster: None,
        }
    }

    pub fn ids(movies: &[Movie]) -> Vec<MovieId> {
        movies.iter().map(|m| m.id).collect()
    }
}
