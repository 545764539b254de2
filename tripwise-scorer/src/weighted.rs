//! The preference-weighted recommender.
#![forbid(unsafe_code)]

use std::sync::Arc;

use tripwise_core::{
    Catalog, Destination, Preference, Recommendation, Recommender, SelectionHistory,
};

use crate::{ScoringConfig, ScoringConfigError};

/// Ranks catalog destinations against weighted preferences.
///
/// The recommender holds the catalog behind an [`Arc`], so clones are cheap
/// and share one read-only copy.
#[derive(Debug, Clone)]
pub struct WeightedRecommender {
    catalog: Arc<Catalog>,
    config: ScoringConfig,
}

impl WeightedRecommender {
    /// Create a recommender with the default [`ScoringConfig`].
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            config: ScoringConfig::default(),
        }
    }

    /// Create a recommender with custom scoring constants.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when `config` fails validation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use tripwise_core::Catalog;
    /// use tripwise_scorer::{ScoringConfig, WeightedRecommender};
    ///
    /// let config = ScoringConfig {
    ///     previous_selection_boost: 1.5,
    ///     ..ScoringConfig::default()
    /// };
    /// let recommender = WeightedRecommender::with_config(Arc::new(Catalog::builtin()), config)
    ///     .expect("valid config");
    /// assert_eq!(recommender.config().previous_selection_boost, 1.5);
    /// ```
    pub fn with_config(
        catalog: Arc<Catalog>,
        config: ScoringConfig,
    ) -> Result<Self, ScoringConfigError> {
        Ok(Self {
            catalog,
            config: config.validate()?,
        })
    }

    /// Catalog the recommender ranks.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scoring constants in use.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn by_rating(&self) -> Vec<Recommendation> {
        let mut listed: Vec<Destination> = self.catalog.destinations().to_vec();
        listed.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        listed.into_iter().map(Recommendation::unscored).collect()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "preference scoring is a weighted sum with a multiplicative boost"
    )]
    fn score(
        &self,
        destination_id: &str,
        active: &[(&str, f64)],
        previous_selections: &SelectionHistory,
    ) -> f64 {
        let weights = self.catalog.weights(destination_id);
        let base: f64 = active
            .iter()
            .map(|&(preference_id, fraction)| {
                let weight = weights
                    .and_then(|table| table.weight(preference_id))
                    .unwrap_or(self.config.default_weight);
                weight * fraction
            })
            .sum();
        if previous_selections.contains(destination_id) {
            base * self.config.previous_selection_boost
        } else {
            base
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "importance is applied as a fraction of 100"
)]
fn importance_fraction(importance: u8) -> f64 {
    f64::from(importance) / 100.0_f64
}

impl Recommender for WeightedRecommender {
    fn recommend(
        &self,
        preferences: &[Preference],
        previous_selections: &SelectionHistory,
    ) -> Vec<Recommendation> {
        let active: Vec<(&str, f64)> = preferences
            .iter()
            .filter(|preference| preference.selected)
            .map(|preference| {
                let importance = preference.importance_or(self.config.default_importance);
                (preference.id.as_str(), importance_fraction(importance))
            })
            .collect();

        if active.is_empty() {
            log::debug!(
                "no preference selected; ordering {} destinations by rating",
                self.catalog.len()
            );
            return self.by_rating();
        }

        let mut scored: Vec<(f64, &Destination)> = self
            .catalog
            .destinations()
            .iter()
            .map(|destination| {
                let score = self.score(&destination.id, &active, previous_selections);
                (score, destination)
            })
            .collect();
        // `sort_by` is stable, so ties keep catalog order.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        log::debug!(
            "ranked {} destinations against {} selected preferences",
            scored.len(),
            active.len()
        );
        scored
            .into_iter()
            .map(|(score, destination)| Recommendation::scored(destination.clone(), score))
            .collect()
    }
}
