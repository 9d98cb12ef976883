//! # Catalog Crate
//!
//! Domain types and the in-memory data store for the movie discovery engine.
//!
//! ## Main Components
//!
//! - **types**: `Movie`, `UserPreferences` and the `MovieStore`
//! - **parser**: JSON catalog files into Rust structs
//! - **loader**: build and validate a `MovieStore` from a data directory
//! - **sample**: the built-in six-movie catalog
//! - **error**: `CatalogError` and the crate `Result` alias
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::MovieStore;
//! use std::path::Path;
//!
//! let mut store = MovieStore::load_from_dir(Path::new("data"))?;
//! let updated = store.apply_rating(3, 9)?;
//! assert!(updated.watched);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod loader;
pub mod sample;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    MovieId,
    Movie,
    UserPreferences,
    MovieStore,
    MIN_USER_RATING,
    MAX_USER_RATING,
    validate_user_rating,
};
pub use loader::{MOVIES_FILE, PREFERENCES_FILE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = MovieStore::new();
        assert!(store.is_empty());
        assert!(store.fetch_all_movies().is_empty());
        assert!(store.fetch_preferences().is_empty());
    }

    #[test]
    fn test_watched_toggle_round_trip() {
        let mut store = MovieStore::sample();

        let movie = store.apply_watched_status(3, true).unwrap();
        assert!(movie.watched);
        assert_eq!(movie.user_rating, None);

        let movie = store.apply_watched_status(3, false).unwrap();
        assert!(!movie.watched);
    }

    #[test]
    fn test_apply_preferences_replaces_wholesale() {
        let mut store = MovieStore::sample();
        let prefs = UserPreferences::new().with_directors(["Michael Mann"]);

        let stored = store.apply_preferences(prefs.clone());
        assert_eq!(stored, prefs);
        assert!(store.fetch_preferences().favorite_genres.is_empty());
        assert!(store.fetch_preferences().watch_later.is_empty());
    }
}
