//! Distinct genre and director labels in a collection.
//!
//! These feed the choices offered for filters and preferences.

use catalog::Movie;
use std::collections::BTreeSet;

/// Every genre that appears in `movies`, de-duplicated and sorted
pub fn unique_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .flat_map(|movie| movie.genres.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every director that appears in `movies`, de-duplicated and sorted
pub fn unique_directors(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .map(|movie| movie.director.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
