//! Core domain types for the movie catalog.
//!
//! - `Movie` and `UserPreferences` are plain serde structs shaped like the
//!   JSON catalog files (camelCase keys, `genre` for the genre list)
//! - `MovieStore` is the in-memory data store: it owns the catalog and the
//!   preference record and applies user edits by whole-record replacement

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie, stable for the movie's lifetime
pub type MovieId = u32;

/// Lowest accepted user rating
pub const MIN_USER_RATING: u8 = 1;

/// Highest accepted user rating
pub const MAX_USER_RATING: u8 = 10;

// =============================================================================
// Movie
// =============================================================================

/// A movie in the catalog.
///
/// From a caller's point of view this is an immutable value: edits go through
/// `MovieStore`, which swaps in a new record for the same `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    pub director: String,
    /// Genre labels in display order. A movie may carry several.
    #[serde(rename = "genre")]
    pub genres: Vec<String>,
    /// Critic score on a 0-10 scale. Not user-editable.
    pub rating: f32,
    pub description: String,
    #[serde(default)]
    pub watched: bool,
    /// The user's own 1-10 score, `None` until the movie is rated
    #[serde(default)]
    pub user_rating: Option<u8>,
    /// Poster image URL, carried through untouched for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl Movie {
    /// True if any of the movie's genres equals `genre` exactly
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

// =============================================================================
// User Preferences
// =============================================================================

/// The user's declared favorites.
///
/// The lists behave as sets (no duplicates, membership is what matters) but
/// keep insertion order so they display the way the user built them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub favorite_genres: Vec<String>,
    pub favorite_directors: Vec<String>,
    /// Movies saved for later. Carried along, not used for recommendations.
    pub watch_later: Vec<MovieId>,
}

impl UserPreferences {
    /// Empty preferences (the cold-start state)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that adds favorite genres, skipping duplicates
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for genre in genres {
            push_unique(&mut self.favorite_genres, genre.into());
        }
        self
    }

    /// Builder-style helper that adds favorite directors, skipping duplicates
    pub fn with_directors<I, S>(mut self, directors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for director in directors {
            push_unique(&mut self.favorite_directors, director.into());
        }
        self
    }

    /// Add the genre if absent, remove it if present
    pub fn toggle_genre(&mut self, genre: &str) {
        toggle(&mut self.favorite_genres, genre);
    }

    /// Add the director if absent, remove it if present
    pub fn toggle_director(&mut self, director: &str) {
        toggle(&mut self.favorite_directors, director);
    }

    /// True when neither genres nor directors are set, so nothing can match
    pub fn is_empty(&self) -> bool {
        self.favorite_genres.is_empty() && self.favorite_directors.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

// =============================================================================
// MovieStore - The In-Memory Data Store
// =============================================================================

/// Owns the canonical catalog and the preference record.
///
/// Movies are kept in catalog order (the order they were loaded in) so that
/// downstream stable sorts have a deterministic tiebreak. `positions` maps
/// each id to its slot for O(1) lookups.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    pub(crate) movies: Vec<Movie>,
    pub(crate) positions: HashMap<MovieId, usize>,
    pub(crate) preferences: UserPreferences,
}

impl MovieStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-parsed data after validating it
    pub fn from_parts(movies: Vec<Movie>, preferences: UserPreferences) -> Result<Self> {
        let mut store = Self::new();
        for movie in movies {
            store.insert_movie(movie)?;
        }
        store.preferences = preferences;
        store.validate()?;
        Ok(store)
    }

    /// Every movie, in catalog order
    pub fn fetch_all_movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up one movie by id
    pub fn fetch_movie(&self, id: MovieId) -> Result<&Movie> {
        self.positions
            .get(&id)
            .map(|&pos| &self.movies[pos])
            .ok_or(CatalogError::MovieNotFound { id })
    }

    /// The current preference record
    pub fn fetch_preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Record a user rating. Rating a movie also marks it watched.
    ///
    /// The rating is checked before the movie is looked up, so an invalid
    /// value never touches the catalog.
    pub fn apply_rating(&mut self, id: MovieId, rating: i64) -> Result<Movie> {
        let rating = validate_user_rating(rating)?;
        self.replace(id, |movie| Movie {
            user_rating: Some(rating),
            watched: true,
            ..movie.clone()
        })
    }

    /// Set or clear the watched flag
    pub fn apply_watched_status(&mut self, id: MovieId, watched: bool) -> Result<Movie> {
        self.replace(id, |movie| Movie {
            watched,
            ..movie.clone()
        })
    }

    /// Replace the preference record wholesale and return the stored copy
    pub fn apply_preferences(&mut self, preferences: UserPreferences) -> UserPreferences {
        self.preferences = preferences;
        self.preferences.clone()
    }

    /// Append a movie to the catalog
    pub fn insert_movie(&mut self, movie: Movie) -> Result<()> {
        if self.positions.contains_key(&movie.id) {
            return Err(CatalogError::DuplicateMovie { id: movie.id });
        }
        self.positions.insert(movie.id, self.movies.len());
        self.movies.push(movie);
        Ok(())
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn replace<F>(&mut self, id: MovieId, update: F) -> Result<Movie>
    where
        F: FnOnce(&Movie) -> Movie,
    {
        let pos = *self
            .positions
            .get(&id)
            .ok_or(CatalogError::MovieNotFound { id })?;
        let updated = update(&self.movies[pos]);
        self.movies[pos] = updated.clone();
        Ok(updated)
    }
}

/// Check that a raw rating lies on the 1-10 scale
pub fn validate_user_rating(value: i64) -> Result<u8> {
    if (MIN_USER_RATING as i64..=MAX_USER_RATING as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(CatalogError::InvalidRating { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            year: 2000,
            director: "Someone".to_string(),
            genres: vec!["Drama".to_string()],
            rating: 7.5,
            description: String::new(),
            watched: false,
            user_rating: None,
            poster: None,
        }
    }

    #[test]
    fn test_validate_user_rating_bounds() {
        assert_eq!(validate_user_rating(1).unwrap(), 1);
        assert_eq!(validate_user_rating(10).unwrap(), 10);
        assert!(matches!(
            validate_user_rating(0),
            Err(CatalogError::InvalidRating { value: 0 })
        ));
        assert!(matches!(
            validate_user_rating(11),
            Err(CatalogError::InvalidRating { value: 11 })
        ));
    }

    #[test]
    fn test_toggle_genre() {
        let mut prefs = UserPreferences::new().with_genres(["Drama", "Action"]);
        prefs.toggle_genre("Drama");
        assert_eq!(prefs.favorite_genres, vec!["Action"]);
        prefs.toggle_genre("Sci-Fi");
        assert_eq!(prefs.favorite_genres, vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn test_with_genres_skips_duplicates() {
        let prefs = UserPreferences::new()
            .with_genres(["Drama", "Drama", "Crime"])
            .with_directors(["A", "A"]);
        assert_eq!(prefs.favorite_genres, vec!["Drama", "Crime"]);
        assert_eq!(prefs.favorite_directors, vec!["A"]);
    }

    #[test]
    fn test_apply_rating_marks_watched() {
        let mut store = MovieStore::new();
        store.insert_movie(movie(1)).unwrap();

        let updated = store.apply_rating(1, 8).unwrap();
        assert_eq!(updated.user_rating, Some(8));
        assert!(updated.watched);
        assert_eq!(store.fetch_movie(1).unwrap(), &updated);
    }

    #[test]
    fn test_apply_rating_invalid_leaves_store_untouched() {
        let mut store = MovieStore::new();
        store.insert_movie(movie(1)).unwrap();

        assert!(store.apply_rating(1, 42).is_err());
        let stored = store.fetch_movie(1).unwrap();
        assert_eq!(stored.user_rating, None);
        assert!(!stored.watched);
    }

    #[test]
    fn test_unknown_movie() {
        let mut store = MovieStore::new();
        assert!(matches!(
            store.apply_watched_status(99, true),
            Err(CatalogError::MovieNotFound { id: 99 })
        ));
        assert!(matches!(
            store.apply_rating(99, 5),
            Err(CatalogError::MovieNotFound { id: 99 })
        ));
        assert!(store.fetch_movie(99).is_err());
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut store = MovieStore::new();
        store.insert_movie(movie(1)).unwrap();
        assert!(matches!(
            store.insert_movie(movie(1)),
            Err(CatalogError::DuplicateMovie { id: 1 })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_movie_json_shape() {
        let json = r#"{
            "id": 7,
            "title": "Heat",
            "poster": "https://example.com/heat.jpg",
            "year": 1995,
            "director": "Michael Mann",
            "genre": ["Crime", "Thriller"],
            "rating": 8.3,
            "description": "A group of professional bank robbers.",
            "watched": false,
            "userRating": null
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.genres, vec!["Crime", "Thriller"]);
        assert_eq!(movie.user_rating, None);
        assert!(movie.has_genre("Crime"));
        assert!(!movie.has_genre("crime"));
        assert_eq!(movie.poster.as_deref(), Some("https://example.com/heat.jpg"));
    }

    #[test]
    fn test_poster_survives_serialization() {
        let mut with_poster = movie(1);
        with_poster.poster = Some("https://example.com/1.jpg".to_string());
        let value = serde_json::to_value(&with_poster).unwrap();
        assert_eq!(value["poster"], "https://example.com/1.jpg");

        let without = serde_json::to_value(movie(2)).unwrap();
        assert!(without.get("poster").is_none());
    }
}
