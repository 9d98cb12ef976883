//! Error types for the catalog crate.
//!
//! Everything the data store or the catalog loader can reject ends up here.
//! The query and recommendation code never produces these: they only come
//! from reading files or applying user edits.

use crate::types::MovieId;
use thiserror::Error;

/// Errors raised by the catalog loader and the in-memory movie store.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No movie with this identifier exists in the catalog.
    ///
    /// Identifiers never reappear once missing, so callers should report
    /// this to the user rather than retry.
    #[error("Movie not found: {id}")]
    MovieNotFound { id: MovieId },

    /// A user rating fell outside the 1-10 scale.
    #[error("Invalid user rating {value}: expected a value between 1 and 10")]
    InvalidRating { value: i64 },

    /// Catalog file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file was not valid JSON for the expected shape
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two movies in one catalog share an identifier.
    #[error("Duplicate movie id {id} in catalog")]
    DuplicateMovie { id: MovieId },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
