//! # Recommender Crate
//!
//! Preference-driven movie recommendations.
//!
//! ## Components
//!
//! ### PreferenceMatcher
//! Decides eligibility: a favorite genre OR a favorite director.
//!
//! ### recommend / recommend_explained
//! Selects the eligible movies and orders them unwatched-first, then by
//! critic rating. The explained variant attaches a `MatchReason` to each.
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::recommend;
//!
//! let suggestions = recommend(store.fetch_all_movies(), store.fetch_preferences());
//! for movie in suggestions.iter().take(4) {
//!     println!("{} ({})", movie.title, movie.rating);
//! }
//! ```
//!
//! The engine is pure: it never mutates the catalog or the preferences and
//! it cannot fail.

pub mod matcher;
pub mod engine;

// Re-export commonly used types
pub use engine::{recommend, recommend_explained, recommendation_order, Recommendation};
pub use matcher::{explain, MatchReason, PreferenceMatcher};
