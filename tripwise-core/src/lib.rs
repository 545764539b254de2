//! Core domain types for the Tripwise recommendation engine.
//!
//! The crate holds the destination catalog, the preference and itinerary
//! models, and the two engine seams: [`Recommender`] ranks the catalog for a
//! caller's preferences and [`ItineraryPlanner`] expands a destination into
//! day-by-day activities. Implementations live in `tripwise-scorer` and
//! `tripwise-planner`.
//!
//! Missing data never fails an engine call. Unknown preferences, unknown
//! destinations and absent importances all resolve to documented defaults
//! ([`DEFAULT_WEIGHT`], [`DEFAULT_IMPORTANCE`], [`FALLBACK_DESTINATION_NAME`]).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod destination;
pub mod discover;
pub mod history;
pub mod ids;
pub mod itinerary;
pub mod planner;
pub mod preference;
pub mod recommender;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod weights;

#[cfg(feature = "serde")]
pub use catalog::CatalogDocument;
pub use catalog::{Catalog, CatalogError, FALLBACK_DESTINATION_NAME};
pub use destination::{Destination, Recommendation};
pub use discover::{find_recommendation, search, toggle_favorite};
pub use history::SelectionHistory;
pub use ids::{IdGenerator, UuidIdGenerator};
pub use itinerary::{
    ActivityTemplate, DEFAULT_ITINERARY_DAYS, ItineraryActivity, ItineraryDay, ItineraryRequest,
};
pub use planner::ItineraryPlanner;
pub use preference::{
    DEFAULT_IMPORTANCE, MAX_IMPORTANCE, Preference, default_preferences, set_importance,
    toggle_preference,
};
pub use recommender::Recommender;
pub use weights::{DEFAULT_WEIGHT, PreferenceWeights};
