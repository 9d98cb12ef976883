//! Filter on release year.

use crate::traits::{select, Filter};
use catalog::Movie;

/// Keeps movies released within an inclusive year range.
///
/// ## Algorithm
/// 1. Missing lower bound: no lower limit
/// 2. Missing upper bound: no upper limit
/// 3. Both present: closed range. `from > to` keeps nothing.
pub struct YearRangeFilter {
    from: Option<u16>,
    to: Option<u16>,
}

impl YearRangeFilter {
    pub fn new(from: Option<u16>, to: Option<u16>) -> Self {
        Self { from, to }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.from.is_none_or(|from| movie.year >= from)
            && self.to.is_none_or(|to| movie.year <= to)
    }
}

/// Keep movies released in `[year_from, year_to]`; both `None` returns the
/// input unchanged.
pub fn filter_by_year(movies: &[Movie], year_from: Option<u16>, year_to: Option<u16>) -> Vec<Movie> {
    if year_from.is_none() && year_to.is_none() {
        return movies.to_vec();
    }
    select(movies, &YearRangeFilter::new(year_from, year_to))
}
