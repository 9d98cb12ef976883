//! Loading and validating a catalog from disk.
//!
//! - Parse movies.json and preferences.json in parallel
//! - Build the store (catalog order preserved, id positions indexed)
//! - Validate the data before anyone queries it

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{info, warn};

/// File name of the movie catalog inside a data directory
pub const MOVIES_FILE: &str = "movies.json";

/// File name of the preference record inside a data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

impl MovieStore {
    /// Load a catalog directory.
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert movies in file order (duplicate ids are rejected)
    /// 3. Validate field ranges
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", data_dir);

        let movies_path = data_dir.join(MOVIES_FILE);
        let preferences_path = data_dir.join(PREFERENCES_FILE);

        let (movies, preferences) = rayon::join(
            || parser::parse_movies(&movies_path),
            || parser::parse_preferences(&preferences_path),
        );
        let movies = movies?;
        let preferences = preferences?;

        info!(
            "Loaded {} movies, {} favorite genres, {} favorite directors",
            movies.len(),
            preferences.favorite_genres.len(),
            preferences.favorite_directors.len()
        );

        Self::from_parts(movies, preferences)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - User ratings are on the 1-10 scale
    /// - Critic ratings are finite numbers
    ///
    /// Movies without genres are tolerated (they can still match on
    /// director) but logged, since the catalog is expected to tag every movie.
    pub fn validate(&self) -> Result<()> {
        for movie in &self.movies {
            if let Some(user_rating) = movie.user_rating {
                validate_user_rating(user_rating as i64)?;
            }
            if !movie.rating.is_finite() {
                return Err(CatalogError::InvalidValue {
                    field: format!("rating (movie {})", movie.id),
                    value: movie.rating.to_string(),
                });
            }
            if movie.genres.is_empty() {
                warn!("Movie {} ({}) has no genres", movie.id, movie.title);
            }
        }
        for &id in &self.preferences.watch_later {
            if !self.positions.contains_key(&id) {
                warn!("Watch-later list references unknown movie {}", id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn data_dir(movies: &str, preferences: Option<&str>) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MOVIES_FILE), movies).unwrap();
        if let Some(preferences) = preferences {
            fs::write(dir.path().join(PREFERENCES_FILE), preferences).unwrap();
        }
        dir
    }

    const TWO_MOVIES: &str = r#"[
        {"id": 1, "title": "Inception", "year": 2010, "director": "Christopher Nolan",
         "genre": ["Sci-Fi", "Action"], "rating": 8.8, "description": "Dreams.",
         "watched": true, "userRating": 9},
        {"id": 2, "title": "Heat", "year": 1995, "director": "Michael Mann",
         "genre": ["Crime"], "rating": 8.3, "description": "Robbers.",
         "watched": false, "userRating": null}
    ]"#;

    #[test]
    fn test_load_from_dir() {
        let dir = data_dir(
            TWO_MOVIES,
            Some(r#"{"favoriteGenres": ["Crime"], "favoriteDirectors": [], "watchLater": [2]}"#),
        );
        let store = MovieStore::load_from_dir(dir.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.fetch_all_movies()[0].id, 1);
        assert_eq!(store.fetch_all_movies()[1].id, 2);
        assert_eq!(store.fetch_preferences().favorite_genres, vec!["Crime"]);
        assert_eq!(store.fetch_preferences().watch_later, vec![2]);
    }

    #[test]
    fn test_load_without_preferences() {
        let dir = data_dir(TWO_MOVIES, None);
        let store = MovieStore::load_from_dir(dir.path()).unwrap();
        assert!(store.fetch_preferences().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dir = data_dir(
            r#"[
                {"id": 1, "title": "A", "year": 2000, "director": "X", "genre": ["Drama"],
                 "rating": 7.0, "description": ""},
                {"id": 1, "title": "B", "year": 2001, "director": "Y", "genre": ["Drama"],
                 "rating": 6.0, "description": ""}
            ]"#,
            None,
        );
        assert!(matches!(
            MovieStore::load_from_dir(dir.path()),
            Err(CatalogError::DuplicateMovie { id: 1 })
        ));
    }

    #[test]
    fn test_out_of_range_user_rating_rejected() {
        let dir = data_dir(
            r#"[{"id": 1, "title": "A", "year": 2000, "director": "X", "genre": ["Drama"],
                 "rating": 7.0, "description": "", "userRating": 11}]"#,
            None,
        );
        assert!(matches!(
            MovieStore::load_from_dir(dir.path()),
            Err(CatalogError::InvalidRating { value: 11 })
        ));
    }

    #[test]
    fn test_missing_movies_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            MovieStore::load_from_dir(dir.path()),
            Err(CatalogError::Io { .. })
        ));
    }
}
