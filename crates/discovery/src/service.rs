//! # Discovery Service
//!
//! Owns the application state that the query pipeline and the
//! recommendation engine run against:
//! 1. The movie store (catalog + preferences)
//! 2. The active filter criteria
//! 3. The current recommendations
//!
//! ## Ordering guarantee
//! Every mutation takes the write lock, applies the change to the store and
//! recomputes recommendations before the lock is released. A reader can
//! therefore never see a rating or preference change without the matching
//! recommendations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::{debug, info};

use catalog::{Movie, MovieId, MovieStore, UserPreferences};
use pipeline::{unique_directors, unique_genres, FilterCriteria};
use recommender::Recommendation;

/// How many recommendations the presentation layer shows by default
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 4;

/// Labels available for filter and preference pickers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facets {
    pub genres: Vec<String>,
    pub directors: Vec<String>,
}

/// Everything behind the lock
#[derive(Debug)]
struct Session {
    store: MovieStore,
    filters: FilterCriteria,
    recommendations: Vec<Movie>,
}

impl Session {
    fn new(store: MovieStore) -> Self {
        let mut session = Self {
            store,
            filters: FilterCriteria::default(),
            recommendations: Vec::new(),
        };
        session.recompute_recommendations();
        session
    }

    fn recompute_recommendations(&mut self) {
        let start = Instant::now();
        self.recommendations = recommender::recommend(
            self.store.fetch_all_movies(),
            self.store.fetch_preferences(),
        );
        debug!(
            "Recomputed {} recommendations in {:.2?}",
            self.recommendations.len(),
            start.elapsed()
        );
    }
}

/// Cheaply cloneable handle to the shared discovery state
#[derive(Clone, Debug)]
pub struct DiscoveryService {
    session: Arc<RwLock<Session>>,
}

impl DiscoveryService {
    /// Wrap an already-built store
    pub fn new(store: MovieStore) -> Self {
        info!("Starting discovery session with {} movies", store.len());
        Self {
            session: Arc::new(RwLock::new(Session::new(store))),
        }
    }

    /// Session over the built-in sample catalog
    pub fn sample() -> Self {
        Self::new(MovieStore::sample())
    }

    /// Load a catalog directory off the async runtime and start a session on it
    pub async fn load(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let store = load_store(data_dir.into()).await?;
        Ok(Self::new(store))
    }

    /// Re-read the catalog from disk, keeping the active filters.
    pub async fn reload(&self, data_dir: impl Into<PathBuf>) -> Result<()> {
        let store = load_store(data_dir.into()).await?;
        let mut session = self.session.write().await;
        session.store = store;
        session.recompute_recommendations();
        info!("Catalog reloaded ({} movies)", session.store.len());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The whole catalog, in catalog order
    pub async fn movies(&self) -> Vec<Movie> {
        self.session.read().await.store.fetch_all_movies().to_vec()
    }

    pub async fn movie(&self, id: MovieId) -> Result<Movie> {
        let session = self.session.read().await;
        let movie = session
            .store
            .fetch_movie(id)
            .with_context(|| format!("Failed to fetch movie {}", id))?;
        Ok(movie.clone())
    }

    pub async fn preferences(&self) -> UserPreferences {
        self.session.read().await.store.fetch_preferences().clone()
    }

    /// Full ordered recommendation list
    pub async fn recommendations(&self) -> Vec<Movie> {
        self.session.read().await.recommendations.clone()
    }

    /// The first `limit` recommendations
    pub async fn top_recommendations(&self, limit: usize) -> Vec<Movie> {
        let session = self.session.read().await;
        session.recommendations.iter().take(limit).cloned().collect()
    }

    /// Recommendations with the reason each one was picked
    pub async fn explained_recommendations(&self) -> Vec<Recommendation> {
        let session = self.session.read().await;
        recommender::recommend_explained(
            session.store.fetch_all_movies(),
            session.store.fetch_preferences(),
        )
    }

    pub async fn filters(&self) -> FilterCriteria {
        self.session.read().await.filters.clone()
    }

    /// The catalog after the active filters, search and sort
    pub async fn visible_movies(&self) -> Vec<Movie> {
        let session = self.session.read().await;
        pipeline::query(session.store.fetch_all_movies(), &session.filters)
    }

    /// Run an ad-hoc query without touching the active filters
    pub async fn query(&self, criteria: &FilterCriteria) -> Vec<Movie> {
        let session = self.session.read().await;
        pipeline::query(session.store.fetch_all_movies(), criteria)
    }

    pub async fn facets(&self) -> Facets {
        let session = self.session.read().await;
        let movies = session.store.fetch_all_movies();
        Facets {
            genres: unique_genres(movies),
            directors: unique_directors(movies),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Rate a movie (1-10). The movie is also marked watched.
    pub async fn rate_movie(&self, id: MovieId, rating: i64) -> Result<Movie> {
        let mut session = self.session.write().await;
        let movie = session
            .store
            .apply_rating(id, rating)
            .with_context(|| format!("Failed to rate movie {}", id))?;
        session.recompute_recommendations();
        info!("Rated movie {} ({}) {}/10", id, movie.title, rating);
        Ok(movie)
    }

    pub async fn set_watched_status(&self, id: MovieId, watched: bool) -> Result<Movie> {
        let mut session = self.session.write().await;
        let movie = session
            .store
            .apply_watched_status(id, watched)
            .with_context(|| format!("Failed to update watched status of movie {}", id))?;
        session.recompute_recommendations();
        info!("Movie {} ({}) watched={}", id, movie.title, watched);
        Ok(movie)
    }

    /// Replace the preference record and recompute recommendations
    pub async fn update_preferences(&self, preferences: UserPreferences) -> UserPreferences {
        let mut session = self.session.write().await;
        let stored = session.store.apply_preferences(preferences);
        session.recompute_recommendations();
        info!(
            "Preferences updated: {} genres, {} directors",
            stored.favorite_genres.len(),
            stored.favorite_directors.len()
        );
        stored
    }

    /// Replace the active filters
    pub async fn set_filters(&self, filters: FilterCriteria) {
        self.session.write().await.filters = filters;
    }

    /// Change only the search text, keeping the other filters
    pub async fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        let mut session = self.session.write().await;
        session.filters.search_query = (!query.is_empty()).then_some(query);
    }

    /// Back to the default criteria (everything, by title ascending)
    pub async fn reset_filters(&self) {
        self.session.write().await.filters = FilterCriteria::default();
    }
}

async fn load_store(data_dir: PathBuf) -> Result<MovieStore> {
    let display = data_dir.display().to_string();
    tokio::task::spawn_blocking(move || MovieStore::load_from_dir(&data_dir))
        .await
        .context("Catalog loading task panicked")?
        .with_context(|| format!("Failed to load movie catalog from {}", display))
}
