//! The destination catalog and its per-destination tables.
//!
//! A [`Catalog`] bundles three read-only tables keyed by destination id:
//! the destination records, their [`PreferenceWeights`], and the ordered
//! [`ActivityTemplate`]s planners rotate through. Engines receive the catalog
//! at construction time, so tests can inject alternate data.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::{ActivityTemplate, Destination, PreferenceWeights};

mod builtin;
#[cfg(feature = "serde")]
mod document;

#[cfg(feature = "serde")]
pub use document::CatalogDocument;

/// Display name used when a destination id is not in the catalog.
pub const FALLBACK_DESTINATION_NAME: &str = "your destination";

/// Errors returned while assembling a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A destination id was empty or whitespace.
    #[error("destination at position {index} has a blank id")]
    BlankId {
        /// Position of the offending destination.
        index: usize,
    },
    /// Two destinations share an id.
    #[error("destination id '{id}' appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// A rating was non-finite or outside `0.0..=5.0`.
    #[error("destination '{id}' has rating {rating}, expected 0.0..=5.0")]
    RatingOutOfRange {
        /// Offending destination.
        id: String,
        /// Rating supplied.
        rating: f64,
    },
    /// A table referenced a destination the catalog does not list.
    #[error("{table} reference unknown destination '{id}'")]
    UnknownDestination {
        /// Table holding the dangling reference.
        table: &'static str,
        /// Unknown identifier.
        id: String,
    },
    /// A weight coefficient was outside `0.0..=1.0`.
    #[error(
        "weight {weight} for preference '{preference_id}' of destination '{destination_id}' is outside 0.0..=1.0"
    )]
    WeightOutOfRange {
        /// Destination owning the weight table.
        destination_id: String,
        /// Preference the coefficient applies to.
        preference_id: String,
        /// Coefficient supplied.
        weight: f64,
    },
}

/// Immutable destination catalog.
///
/// Destination identifiers are unique and non-blank, ratings lie in
/// `0.0..=5.0` and weights in `0.0..=1.0`. Constructors return `Result`
/// to surface invalid data early.
///
/// # Examples
/// ```
/// use tripwise_core::{Catalog, Destination, PreferenceWeights};
///
/// # fn main() -> Result<(), tripwise_core::CatalogError> {
/// let catalog = Catalog::new(vec![
///     Destination::new("1", "Kyoto", "Japan").with_rating(4.8),
///     Destination::new("2", "Barcelona", "Spain").with_rating(4.7),
/// ])?
/// .with_weights("1", PreferenceWeights::new().with_weight("1", 0.9))?;
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.weights("1").and_then(|w| w.weight("1")), Some(0.9));
/// assert!(catalog.activities("2").is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
    weights: BTreeMap<String, PreferenceWeights>,
    activities: BTreeMap<String, Vec<ActivityTemplate>>,
}

impl Catalog {
    /// Validate and construct a catalog without weights or activities.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for blank or duplicate ids and out-of-range
    /// ratings.
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let catalog = Self {
            destinations,
            weights: BTreeMap::new(),
            activities: BTreeMap::new(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Attach a weight table to a listed destination.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownDestination`] when `destination_id` is
    /// not listed and [`CatalogError::WeightOutOfRange`] for coefficients
    /// outside `0.0..=1.0`.
    pub fn with_weights(
        mut self,
        destination_id: impl Into<String>,
        weights: PreferenceWeights,
    ) -> Result<Self, CatalogError> {
        let id = destination_id.into();
        self.require_listed("weights", &id)?;
        check_weights(&id, &weights)?;
        self.weights.insert(id, weights);
        Ok(self)
    }

    /// Attach ordered activity templates to a listed destination.
    ///
    /// An empty list is accepted and behaves exactly like no list at all.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownDestination`] when `destination_id` is
    /// not listed.
    pub fn with_activities(
        mut self,
        destination_id: impl Into<String>,
        templates: Vec<ActivityTemplate>,
    ) -> Result<Self, CatalogError> {
        let id = destination_id.into();
        self.require_listed("activities", &id)?;
        self.activities.insert(id, templates);
        Ok(self)
    }

    /// All destinations in catalog order.
    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Look up a destination by id.
    #[must_use]
    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|destination| destination.id == id)
    }

    /// Display name for `id`, or [`FALLBACK_DESTINATION_NAME`] when unknown.
    #[must_use]
    pub fn display_name(&self, id: &str) -> &str {
        self.destination(id)
            .map_or(FALLBACK_DESTINATION_NAME, |destination| {
                destination.name.as_str()
            })
    }

    /// Weight table for a destination, if one was configured.
    #[must_use]
    pub fn weights(&self, id: &str) -> Option<&PreferenceWeights> {
        self.weights.get(id)
    }

    /// Activity templates for a destination; empty when none are configured.
    #[must_use]
    pub fn activities(&self, id: &str) -> &[ActivityTemplate] {
        self.activities
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Report whether the catalog lists no destinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Check every catalog invariant.
    ///
    /// # Errors
    /// Returns the first [`CatalogError`] found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.destinations.len());
        for (index, destination) in self.destinations.iter().enumerate() {
            if destination.id.trim().is_empty() {
                return Err(CatalogError::BlankId { index });
            }
            if !seen.insert(destination.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: destination.id.clone(),
                });
            }
            if !(0.0..=5.0).contains(&destination.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: destination.id.clone(),
                    rating: destination.rating,
                });
            }
        }
        for (id, weights) in &self.weights {
            self.require_listed("weights", id)?;
            check_weights(id, weights)?;
        }
        for id in self.activities.keys() {
            self.require_listed("activities", id)?;
        }
        Ok(())
    }

    fn require_listed(&self, table: &'static str, id: &str) -> Result<(), CatalogError> {
        if self.destination(id).is_some() {
            Ok(())
        } else {
            Err(CatalogError::UnknownDestination {
                table,
                id: id.to_owned(),
            })
        }
    }
}

fn check_weights(destination_id: &str, weights: &PreferenceWeights) -> Result<(), CatalogError> {
    match weights
        .iter()
        .find(|(_, weight)| !(0.0..=1.0).contains(weight))
    {
        Some((preference_id, weight)) => Err(CatalogError::WeightOutOfRange {
            destination_id: destination_id.to_owned(),
            preference_id: preference_id.to_owned(),
            weight,
        }),
        None => Ok(()),
    }
}
