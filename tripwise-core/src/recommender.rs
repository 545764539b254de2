//! Rank catalog destinations for a caller.
//!
//! The `Recommender` trait orders every destination of a
//! [`Catalog`](crate::Catalog) according to the caller's
//! [`Preference`]s and [`SelectionHistory`].

use crate::{Preference, Recommendation, SelectionHistory};

/// Produce a ranked list of destinations.
///
/// Implementations must:
/// - return exactly one [`Recommendation`] per catalog destination, so the
///   output is a permutation of the catalog;
/// - leave their inputs and the catalog untouched;
/// - be deterministic for fixed inputs.
///
/// The method is infallible. Unknown preference identifiers and absent
/// importances resolve to defaults rather than errors.
///
/// # Examples
///
/// ```rust
/// use tripwise_core::{
///     Destination, Preference, Recommendation, Recommender, SelectionHistory,
/// };
///
/// struct Alphabetical(Vec<Destination>);
///
/// impl Recommender for Alphabetical {
///     fn recommend(
///         &self,
///         _preferences: &[Preference],
///         _history: &SelectionHistory,
///     ) -> Vec<Recommendation> {
///         let mut ranked: Vec<_> = self.0.iter().cloned().map(Recommendation::unscored).collect();
///         ranked.sort_by(|a, b| a.destination.name.cmp(&b.destination.name));
///         ranked
///     }
/// }
///
/// let recommender = Alphabetical(vec![
///     Destination::new("2", "Rome", "Italy"),
///     Destination::new("1", "Bali", "Indonesia"),
/// ]);
/// let ranked = recommender.recommend(&[], &SelectionHistory::new());
/// assert_eq!(ranked[0].id(), "1");
/// ```
pub trait Recommender: Send + Sync {
    /// Rank the catalog for `preferences`, boosting `previous_selections`.
    fn recommend(
        &self,
        preferences: &[Preference],
        previous_selections: &SelectionHistory,
    ) -> Vec<Recommendation>;
}
