//! Core traits for the query pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicate stages to be applied to a movie sequence.

use catalog::Movie;

/// A predicate stage over movies.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - `apply` takes ownership of the Vec and keeps matching movies in place,
///   so a chain of filters never re-clones the survivors
/// - Every stage preserves the relative order of the movies it keeps
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// True if `movie` passes this stage
    fn matches(&self, movie: &Movie) -> bool;

    /// Apply this filter to a set of movies (takes ownership).
    fn apply(&self, mut movies: Vec<Movie>) -> Vec<Movie> {
        movies.retain(|movie| self.matches(movie));
        movies
    }
}

/// Clone the movies that pass `filter` into a new Vec, leaving the input alone
pub(crate) fn select(movies: &[Movie], filter: &impl Filter) -> Vec<Movie> {
    movies
        .iter()
        .filter(|movie| filter.matches(movie))
        .cloned()
        .collect()
}
