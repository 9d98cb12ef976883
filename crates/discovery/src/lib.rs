//! Discovery crate for the movie discovery engine.
//!
//! This crate holds the session state (catalog, preferences, filters,
//! recommendations) and sequences every "update, then recompute" step.

pub mod service;

pub use service::{DiscoveryService, Facets, DEFAULT_RECOMMENDATION_LIMIT};
