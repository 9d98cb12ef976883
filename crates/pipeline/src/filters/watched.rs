//! Filter on the user's watched flag.
//!
//! This is a three-valued filter: "no filter" is its own state and must not
//! collapse into either "watched" or "unwatched".

use crate::traits::{select, Filter};
use catalog::Movie;
use serde::{Deserialize, Serialize};

/// Which movies to keep by watched status.
///
/// Serialized as an optional boolean (`null`/absent, `true`, `false`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum WatchStatus {
    /// No filtering
    #[default]
    Any,
    Watched,
    Unwatched,
}

impl WatchStatus {
    /// The watched flag a movie must have, or `None` for `Any`
    pub fn as_flag(self) -> Option<bool> {
        match self {
            WatchStatus::Any => None,
            WatchStatus::Watched => Some(true),
            WatchStatus::Unwatched => Some(false),
        }
    }
}

impl From<Option<bool>> for WatchStatus {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            None => WatchStatus::Any,
            Some(true) => WatchStatus::Watched,
            Some(false) => WatchStatus::Unwatched,
        }
    }
}

impl From<WatchStatus> for Option<bool> {
    fn from(status: WatchStatus) -> Self {
        status.as_flag()
    }
}

/// Keeps movies whose `watched` flag equals the requested one.
pub struct WatchedFilter {
    status: WatchStatus,
}

impl WatchedFilter {
    pub fn new(status: WatchStatus) -> Self {
        Self { status }
    }
}

impl Filter for WatchedFilter {
    fn name(&self) -> &str {
        "WatchedFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.status
            .as_flag()
            .is_none_or(|watched| movie.watched == watched)
    }
}

/// Keep movies with the given watched status; `Any` returns the input unchanged.
pub fn filter_by_watched_status(movies: &[Movie], status: WatchStatus) -> Vec<Movie> {
    match status {
        WatchStatus::Any => movies.to_vec(),
        status => select(movies, &WatchedFilter::new(status)),
    }
}
