//! Free-text search over title and description.

use crate::traits::{select, Filter};
use catalog::Movie;

/// Case-insensitive substring match against the title OR the description.
pub struct SearchFilter {
    /// Lowercased once up front
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.needle.is_empty()
            || movie.title.to_lowercase().contains(&self.needle)
            || movie.description.to_lowercase().contains(&self.needle)
    }
}

/// Keep movies matching `query`; `None` or `""` returns the input unchanged.
pub fn search_movies(movies: &[Movie], query: Option<&str>) -> Vec<Movie> {
    match query {
        Some(query) if !query.is_empty() => select(movies, &SearchFilter::new(query)),
        _ => movies.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, movie};

    fn movies() -> Vec<Movie> {
        vec![
            Movie {
                title: "Inception".into(),
                description: "A thief who steals corporate secrets through the use of \
                              dream-sharing technology."
                    .into(),
                ..movie(1)
            },
            Movie {
                title: "The Godfather".into(),
                description: "The aging patriarch of an organized crime dynasty.".into(),
                ..movie(2)
            },
            Movie {
                title: "Dreamgirls".into(),
                description: "A trio of singers.".into(),
                ..movie(3)
            },
        ]
    }

    #[test]
    fn test_search_matches_description() {
        assert_eq!(ids(&search_movies(&movies(), Some("dream"))), vec![1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(ids(&search_movies(&movies(), Some("DREAM"))), vec![1, 3]);
        assert_eq!(ids(&search_movies(&movies(), Some("godFATHER"))), vec![2]);
    }

    #[test]
    fn test_search_no_match() {
        assert!(search_movies(&movies(), Some("wormhole")).is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let movies = movies();
        assert_eq!(search_movies(&movies, None), movies);
        assert_eq!(search_movies(&movies, Some("")), movies);
    }
}
