use std::fs;

use tempfile::TempDir;

use catalog::{CatalogError, MovieId, MovieStore, MOVIES_FILE, PREFERENCES_FILE};
use discovery::DiscoveryService;
use pipeline::{FilterCriteria, SortBy, SortDirection};

/// Write the sample catalog into a fresh directory
fn sample_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    let store = MovieStore::sample();
    fs::write(
        dir.path().join(MOVIES_FILE),
        serde_json::to_string_pretty(store.fetch_all_movies()).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.path().join(PREFERENCES_FILE),
        serde_json::to_string_pretty(store.fetch_preferences()).unwrap(),
    )
    .unwrap();
    dir
}

fn ids(movies: &[catalog::Movie]) -> Vec<MovieId> {
    movies.iter().map(|m| m.id).collect()
}

#[tokio::test]
async fn test_loaded_catalog_matches_sample() {
    let dir = sample_dir();
    let loaded = DiscoveryService::load(dir.path()).await.unwrap();
    let sample = DiscoveryService::sample();

    assert_eq!(loaded.movies().await, sample.movies().await);
    assert_eq!(loaded.preferences().await, sample.preferences().await);
    assert_eq!(ids(&loaded.recommendations().await), vec![5, 3, 6, 2, 4, 1]);
}

#[tokio::test]
async fn test_reload_discards_session_changes_but_keeps_filters() {
    let dir = sample_dir();
    let service = DiscoveryService::load(dir.path()).await.unwrap();

    let criteria = FilterCriteria::new().sorted_by(SortBy::Year, SortDirection::Descending);
    service.set_filters(criteria.clone()).await;
    service.rate_movie(3, 10).await.unwrap();
    assert!(service.movie(3).await.unwrap().watched);

    service.reload(dir.path()).await.unwrap();

    let movie = service.movie(3).await.unwrap();
    assert!(!movie.watched);
    assert_eq!(movie.user_rating, None);
    assert_eq!(service.filters().await, criteria);
    assert_eq!(ids(&service.visible_movies().await), vec![6, 1, 3, 2, 4, 5]);
}

#[tokio::test]
async fn test_duplicate_ids_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut movies = MovieStore::sample().fetch_all_movies().to_vec();
    movies.push(movies[0].clone());
    fs::write(dir.path().join(MOVIES_FILE), serde_json::to_string(&movies).unwrap()).unwrap();

    let err = DiscoveryService::load(dir.path()).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::DuplicateMovie { id: 1 })
    ));
}
