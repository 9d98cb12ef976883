//! Filter to keep only movies tagged with one genre.

use crate::traits::{select, Filter};
use catalog::Movie;

/// Keeps movies whose genre list contains an exact, case-sensitive match.
///
/// An empty label matches everything.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.genre.is_empty() || movie.has_genre(&self.genre)
    }
}

/// Keep movies in `genre`; `None` or `""` returns the input unchanged.
pub fn filter_by_genre(movies: &[Movie], genre: Option<&str>) -> Vec<Movie> {
    match genre {
        Some(genre) if !genre.is_empty() => select(movies, &GenreFilter::new(genre)),
        _ => movies.to_vec(),
    }
}
