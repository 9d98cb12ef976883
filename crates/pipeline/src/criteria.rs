//! Query parameters and the composite `query` operation.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::WatchStatus;
use crate::sort::{sort_in_place, SortBy, SortDirection};
use catalog::Movie;
use serde::{Deserialize, Serialize};

/// Filter, search and sort parameters for one query.
///
/// Every field is optional in practice: the default criteria keep every
/// movie and sort by title ascending. Built fresh per query and discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub director: Option<String>,
    pub watched: WatchStatus,
    pub year_from: Option<u16>,
    pub year_to: Option<u16>,
    pub search_query: Option<String>,
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_watched(mut self, watched: impl Into<WatchStatus>) -> Self {
        self.watched = watched.into();
        self
    }

    pub fn with_years(mut self, from: Option<u16>, to: Option<u16>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy, direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.sort_direction = direction;
        self
    }
}

/// Run the full pipeline: search and filters first, then the sort.
///
/// Filtering keeps relative order, so sorting last gives the same result as
/// sorting first while only ordering the survivors.
pub fn query(movies: &[Movie], criteria: &FilterCriteria) -> Vec<Movie> {
    let mut result = FilterPipeline::from_criteria(criteria).apply(movies.to_vec());
    sort_in_place(&mut result, criteria.sort_by, criteria.sort_direction);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, movie};

    fn movies() -> Vec<Movie> {
        vec![
            Movie { title: "Zodiac".into(), year: 2007, genres: vec!["Crime".into()], ..movie(1) },
            Movie { title: "Heat".into(), year: 1995, genres: vec!["Crime".into()], ..movie(2) },
            Movie { title: "Amelie".into(), year: 2001, genres: vec!["Romance".into()], ..movie(3) },
        ]
    }

    #[test]
    fn test_default_criteria_sorts_by_title() {
        let result = query(&movies(), &FilterCriteria::default());
        assert_eq!(ids(&result), vec![3, 2, 1]);
    }

    #[test]
    fn test_filter_then_sort() {
        let criteria = FilterCriteria::new()
            .with_genre("Crime")
            .sorted_by(SortBy::Year, SortDirection::Descending);
        assert_eq!(ids(&query(&movies(), &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_deserialize_from_ui_shape() {
        let json = r#"{
            "genre": "",
            "director": "",
            "yearFrom": null,
            "yearTo": 2005,
            "searchQuery": "",
            "sortBy": "userRating",
            "sortDirection": "desc"
        }"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.watched, WatchStatus::Any);
        assert_eq!(criteria.year_to, Some(2005));
        assert_eq!(criteria.sort_by, SortBy::UserRating);
        assert_eq!(criteria.sort_direction, SortDirection::Descending);

        let criteria: FilterCriteria = serde_json::from_str(r#"{"watched": false}"#).unwrap();
        assert_eq!(criteria.watched, WatchStatus::Unwatched);
    }
}
