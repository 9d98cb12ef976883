//! Recommendation engine
//!
//! ## Algorithm
//! 1. Keep every movie the `PreferenceMatcher` accepts
//! 2. Order unwatched before watched
//! 3. Within each group, order by critic rating, highest first
//! 4. Return the whole ordered subset (callers truncate for display)
//!
//! Empty preferences give an empty result. There is no popularity fallback
//! for a cold start.

use crate::matcher::{MatchReason, PreferenceMatcher};
use catalog::{Movie, UserPreferences};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// A recommended movie together with the reason it was picked
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub movie: Movie,
    pub reason: MatchReason,
}

/// Recommendation order: unwatched first, then critic rating descending.
pub fn recommendation_order(a: &Movie, b: &Movie) -> Ordering {
    a.watched
        .cmp(&b.watched)
        .then_with(|| b.rating.total_cmp(&a.rating))
}

/// Select and order the movies matching `preferences`.
#[instrument(skip_all, fields(catalog_size = movies.len()))]
pub fn recommend(movies: &[Movie], preferences: &UserPreferences) -> Vec<Movie> {
    let matcher = PreferenceMatcher::new(preferences);
    if matcher.is_empty() {
        debug!("No favorite genres or directors, nothing to recommend");
        return Vec::new();
    }

    let mut selected: Vec<Movie> = movies
        .iter()
        .filter(|movie| matcher.matches(movie))
        .cloned()
        .collect();
    // stable: equal keys keep catalog order
    selected.sort_by(recommendation_order);

    debug!("Recommending {} of {} movies", selected.len(), movies.len());
    selected
}

/// Same selection and order as `recommend`, with a reason for each movie.
#[instrument(skip_all, fields(catalog_size = movies.len()))]
pub fn recommend_explained(movies: &[Movie], preferences: &UserPreferences) -> Vec<Recommendation> {
    let matcher = PreferenceMatcher::new(preferences);

    let mut recommendations: Vec<Recommendation> = movies
        .iter()
        .filter_map(|movie| {
            matcher.explain(movie).map(|reason| Recommendation {
                movie: movie.clone(),
                reason,
            })
        })
        .collect();
    recommendations.sort_by(|a, b| recommendation_order(&a.movie, &b.movie));

    debug!("Explained {} recommendations", recommendations.len());
    recommendations
}
