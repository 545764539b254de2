//! Facade crate for the Tripwise recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! recommender and itinerary planner behind feature flags.

#![forbid(unsafe_code)]

pub use tripwise_core::{
    ActivityTemplate, Catalog, CatalogError, DEFAULT_IMPORTANCE, DEFAULT_ITINERARY_DAYS,
    DEFAULT_WEIGHT, Destination, FALLBACK_DESTINATION_NAME, IdGenerator, ItineraryActivity,
    ItineraryDay, ItineraryPlanner, ItineraryRequest, Preference, PreferenceWeights,
    Recommendation, Recommender, SelectionHistory, UuidIdGenerator, default_preferences,
    find_recommendation, search, set_importance, toggle_favorite, toggle_preference,
};

#[cfg(feature = "serde")]
pub use tripwise_core::CatalogDocument;

#[cfg(feature = "scorer")]
pub use tripwise_scorer::{ScoringConfig, ScoringConfigError, WeightedRecommender};

#[cfg(feature = "planner")]
pub use tripwise_planner::{MAX_ACTIVITIES_PER_DAY, RotatingPlanner, generic_activities};
