//! Benchmarks for the query pipeline
//!
//! Run with: cargo bench --package pipeline

use catalog::Movie;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{query, sort_movies, FilterCriteria, SortBy, SortDirection, WatchStatus};

const GENRES: [&str; 6] = ["Action", "Adventure", "Crime", "Drama", "Sci-Fi", "Thriller"];

fn synthetic_catalog(size: u32) -> Vec<Movie> {
    (0..size)
        .map(|i| Movie {
            id: i,
            title: format!("Movie {:05}", (i * 7919) % size),
            year: 1950 + (i % 75) as u16,
            director: format!("Director {}", i % 40),
            genres: vec![
                GENRES[i as usize % GENRES.len()].to_string(),
                GENRES[(i as usize / 3) % GENRES.len()].to_string(),
            ],
            rating: (i % 100) as f32 / 10.0,
            description: format!("Synthetic movie number {} about dreams and heists", i),
            watched: i % 3 == 0,
            user_rating: (i % 4 != 0).then_some((i % 10 + 1) as u8),
            poster: None,
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let movies = synthetic_catalog(10_000);
    let criteria = FilterCriteria::new()
        .with_genre("Drama")
        .with_watched(WatchStatus::Unwatched)
        .with_years(Some(1970), Some(2010))
        .with_search("heist")
        .sorted_by(SortBy::Rating, SortDirection::Descending);

    c.bench_function("query_10k", |b| {
        b.iter(|| black_box(query(black_box(&movies), black_box(&criteria))))
    });
}

fn bench_sort_user_rating(c: &mut Criterion) {
    let movies = synthetic_catalog(10_000);

    c.bench_function("sort_user_rating_10k", |b| {
        b.iter(|| {
            black_box(sort_movies(
                black_box(&movies),
                SortBy::UserRating,
                SortDirection::Descending,
            ))
        })
    });
}

criterion_group!(benches, bench_query, bench_sort_user_rating);
criterion_main!(benches);
