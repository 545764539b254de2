//! Preference-weighted destination ranking for Tripwise.
//!
//! [`WeightedRecommender`] implements
//! [`Recommender`](tripwise_core::Recommender). For every catalog destination
//! it sums, over the caller's selected preferences, the destination's weight
//! for that preference multiplied by the preference importance expressed as a
//! fraction of 100. Destinations the caller picked before get a
//! multiplicative boost. With no preference selected the catalog is simply
//! ordered by rating and scores are left absent.
//!
//! Missing data never fails a call: an absent weight reads as
//! [`DEFAULT_WEIGHT`] and an absent importance as [`DEFAULT_IMPORTANCE`].
//! Both defaults, and the boost, can be tuned through [`ScoringConfig`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tripwise_core::{Catalog, Preference, Recommender, SelectionHistory};
//! use tripwise_scorer::WeightedRecommender;
//!
//! let recommender = WeightedRecommender::new(Arc::new(Catalog::builtin()));
//! let preferences = [Preference::new("1").with_selected(true).with_importance(100)];
//!
//! let ranked = recommender.recommend(&preferences, &SelectionHistory::new());
//! assert_eq!(ranked[0].destination.name, "Kyoto");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod weighted;

pub use config::{PREVIOUS_SELECTION_BOOST, ScoringConfig, ScoringConfigError};
pub use tripwise_core::{DEFAULT_IMPORTANCE, DEFAULT_WEIGHT};
pub use weighted::WeightedRecommender;

#[cfg(test)]
mod tests;
