//! Sorting for the query pipeline.
//!
//! All sorts are stable and produce a new Vec; the input slice is never
//! reordered. Descending order reverses the comparator rather than the
//! output, so equal movies keep their input order in both directions.

use catalog::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Field to order movies by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Title,
    Year,
    Rating,
    /// The user's own score. Unrated movies always come last.
    UserRating,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Apply this direction to an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Error for sort names that don't map to a known option
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option: {0}")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortBy {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortBy::Title),
            "year" => Ok(SortBy::Year),
            "rating" => Ok(SortBy::Rating),
            "userRating" | "user-rating" => Ok(SortBy::UserRating),
            _ => Err(UnknownSortOption(s.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(UnknownSortOption(s.to_string())),
        }
    }
}

/// Base letters only: decomposed, accents dropped, case folded
fn primary_key(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Decomposed and case folded, accents kept
fn secondary_key(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

/// Collation-style title comparison in three levels:
/// 1. base letters, ignoring accents and case ("Élite" sorts with "E")
/// 2. unaccented before accented ("resume" < "résumé")
/// 3. lowercase before uppercase
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| b.nfd().cmp(a.nfd()))
}

/// Full comparator for one sort option and direction.
pub fn compare_movies(a: &Movie, b: &Movie, sort_by: SortBy, direction: SortDirection) -> Ordering {
    match sort_by {
        SortBy::Title => direction.apply(compare_titles(&a.title, &b.title)),
        SortBy::Year => direction.apply(a.year.cmp(&b.year)),
        SortBy::Rating => direction.apply(a.rating.total_cmp(&b.rating)),
        // Unrated sorts after rated regardless of direction; only the rated
        // subset is affected by the direction.
        SortBy::UserRating => match (a.user_rating, b.user_rating) {
            (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Stable in-place sort, used by the pipeline on a Vec it already owns
pub fn sort_in_place(movies: &mut [Movie], sort_by: SortBy, direction: SortDirection) {
    movies.sort_by(|a, b| compare_movies(a, b, sort_by, direction));
}

/// Return a sorted copy of `movies`
pub fn sort_movies(movies: &[Movie], sort_by: SortBy, direction: SortDirection) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sort_in_place(&mut sorted, sort_by, direction);
    sorted
}
