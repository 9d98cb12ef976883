//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{DirectorFilter, GenreFilter, SearchFilter, WatchStatus, WatchedFilter, YearRangeFilter};
use crate::traits::Filter;
use catalog::Movie;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter::new("dream"))
///     .add_filter(GenreFilter::new("Sci-Fi"))
///     .add_filter(WatchedFilter::new(WatchStatus::Unwatched));
///
/// let filtered = pipeline.apply(movies);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the pipeline for a set of criteria.
    ///
    /// Only stages whose criteria are set get added, in query order:
    /// search, genre, director, watched status, year range.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();

        if let Some(query) = non_empty(&criteria.search_query) {
            pipeline = pipeline.add_filter(SearchFilter::new(query));
        }
        if let Some(genre) = non_empty(&criteria.genre) {
            pipeline = pipeline.add_filter(GenreFilter::new(genre));
        }
        if let Some(director) = non_empty(&criteria.director) {
            pipeline = pipeline.add_filter(DirectorFilter::new(director));
        }
        if criteria.watched != WatchStatus::Any {
            pipeline = pipeline.add_filter(WatchedFilter::new(criteria.watched));
        }
        if criteria.year_from.is_some() || criteria.year_to.is_some() {
            pipeline = pipeline.add_filter(YearRangeFilter::new(criteria.year_from, criteria.year_to));
        }

        pipeline
    }

    /// Number of stages in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with the input movies
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// True if `movie` passes every stage
    pub fn matches(&self, movie: &Movie) -> bool {
        self.filters.iter().all(|filter| filter.matches(movie))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
