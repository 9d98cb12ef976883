//! Preference matching
//!
//! A movie is eligible for recommendation when it shares at least one genre
//! with the user's favorites OR was made by a favorite director. There is no
//! weighting: one weak signal makes a movie exactly as eligible as several.
//!
//! ## Learning Goals
//! - HashSet of borrowed `&str` for O(1) membership without cloning labels
//! - Lifetimes tying the matcher to the preferences it was built from

use catalog::{Movie, UserPreferences};
use serde::Serialize;
use std::collections::HashSet;

/// Why a movie was recommended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReason {
    /// Favorite genres the movie carries, in the movie's genre order
    pub matched_genres: Vec<String>,
    /// True if the director is a favorite
    pub director_match: bool,
}

impl MatchReason {
    /// One-line human readable summary
    pub fn describe(&self, director: &str) -> String {
        let mut parts = Vec::new();
        if !self.matched_genres.is_empty() {
            parts.push(format!("you like {}", self.matched_genres.join(", ")));
        }
        if self.director_match {
            parts.push(format!("directed by {}", director));
        }
        parts.join("; ")
    }
}

/// Membership sets built once from a preference record
pub struct PreferenceMatcher<'a> {
    genres: HashSet<&'a str>,
    directors: HashSet<&'a str>,
}

impl<'a> PreferenceMatcher<'a> {
    pub fn new(preferences: &'a UserPreferences) -> Self {
        Self {
            genres: preferences.favorite_genres.iter().map(String::as_str).collect(),
            directors: preferences.favorite_directors.iter().map(String::as_str).collect(),
        }
    }

    /// True when nothing can match (no favorite genres or directors)
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.directors.is_empty()
    }

    /// Genre intersection OR director membership
    pub fn matches(&self, movie: &Movie) -> bool {
        self.directors.contains(movie.director.as_str())
            || movie.genres.iter().any(|g| self.genres.contains(g.as_str()))
    }

    /// The reason `movie` matches, or `None` if it doesn't
    pub fn explain(&self, movie: &Movie) -> Option<MatchReason> {
        let matched_genres: Vec<String> = movie
            .genres
            .iter()
            .filter(|g| self.genres.contains(g.as_str()))
            .cloned()
            .collect();
        let director_match = self.directors.contains(movie.director.as_str());

        if matched_genres.is_empty() && !director_match {
            return None;
        }
        Some(MatchReason {
            matched_genres,
            director_match,
        })
    }
}

/// Convenience wrapper for a single movie
pub fn explain(movie: &Movie, preferences: &UserPreferences) -> Option<MatchReason> {
    PreferenceMatcher::new(preferences).explain(movie)
}
