//! Filter to keep only one director's movies.

use crate::traits::{select, Filter};
use catalog::Movie;

/// Exact string equality on the director. An empty name matches everything.
pub struct DirectorFilter {
    director: String,
}

impl DirectorFilter {
    pub fn new(director: impl Into<String>) -> Self {
        Self {
            director: director.into(),
        }
    }
}

impl Filter for DirectorFilter {
    fn name(&self) -> &str {
        "DirectorFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.director.is_empty() || movie.director == self.director
    }
}

/// Keep movies by `director`; `None` or `""` returns the input unchanged.
pub fn filter_by_director(movies: &[Movie], director: Option<&str>) -> Vec<Movie> {
    match director {
        Some(director) if !director.is_empty() => select(movies, &DirectorFilter::new(director)),
        _ => movies.to_vec(),
    }
}
