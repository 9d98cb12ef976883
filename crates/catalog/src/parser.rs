//! Parser for catalog data files.
//!
//! A catalog directory holds two JSON files:
//! - movies.json: array of movie objects
//!   (`id`, `title`, `year`, `director`, `genre`, `rating`, `description`,
//!   `watched`, `userRating`)
//! - preferences.json: `{ favoriteGenres, favoriteDirectors, watchLater }`
//!
//! Extra keys (e.g. `poster`) are ignored.

use crate::error::{CatalogError, Result};
use crate::types::{Movie, UserPreferences};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Read and deserialize one JSON file, attaching the path to any error
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Parse the movies.json file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    read_json(path)
}

/// Parse the preferences.json file
///
/// A missing file is not an error: the user simply has no preferences yet.
pub fn parse_preferences(path: &Path) -> Result<UserPreferences> {
    match read_json(path) {
        Err(CatalogError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            Ok(UserPreferences::default())
        }
        other => other,
    }
}
