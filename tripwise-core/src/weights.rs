//! Per-destination preference coefficients.

use std::collections::BTreeMap;

/// Coefficient assumed for a preference a destination has no entry for.
pub const DEFAULT_WEIGHT: f64 = 0.3;

/// How well a destination satisfies each preference dimension.
///
/// Keys are preference identifiers and values are coefficients in the
/// inclusive range `[0.0, 1.0]`.
///
/// # Examples
/// ```
/// use tripwise_core::PreferenceWeights;
///
/// let weights = PreferenceWeights::new()
///     .with_weight("1", 0.9)
///     .with_weight("2", 0.7);
/// assert_eq!(weights.weight("1"), Some(0.9));
/// assert!(weights.weight("3").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PreferenceWeights {
    weights: BTreeMap<String, f64>,
}

impl PreferenceWeights {
    /// Construct an empty weight table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the coefficient for a preference, if present.
    #[must_use]
    pub fn weight(&self, preference_id: &str) -> Option<f64> {
        self.weights.get(preference_id).copied()
    }

    /// Insert or update a coefficient.
    ///
    /// Values are clamped into `0.0..=1.0`; non-finite values are stored as
    /// `0.0`.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::PreferenceWeights;
    ///
    /// let mut weights = PreferenceWeights::new();
    /// weights.set_weight("6", 1.4);
    /// assert_eq!(weights.weight("6"), Some(1.0));
    /// ```
    pub fn set_weight(&mut self, preference_id: impl Into<String>, weight: f64) {
        let clamped = if weight.is_finite() {
            weight.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.weights.insert(preference_id.into(), clamped);
    }

    /// Add a coefficient while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, preference_id: impl Into<String>, weight: f64) -> Self {
        self.set_weight(preference_id, weight);
        self
    }

    /// Iterate over `(preference id, coefficient)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(id, weight)| (id.as_str(), *weight))
    }

    /// Number of explicit coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether the table has no explicit coefficients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PreferenceWeights {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |weights, (id, weight)| weights.with_weight(id, weight))
    }
}
