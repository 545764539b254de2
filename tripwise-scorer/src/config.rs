//! Tunable scoring constants.
#![forbid(unsafe_code)]

use thiserror::Error;
use tripwise_core::{DEFAULT_IMPORTANCE, DEFAULT_WEIGHT, MAX_IMPORTANCE};

/// Multiplier applied to destinations found in the selection history.
pub const PREVIOUS_SELECTION_BOOST: f64 = 1.2;

/// Constants used by [`WeightedRecommender`](crate::WeightedRecommender).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Weight assumed when a destination has no coefficient for a preference.
    pub default_weight: f64,
    /// Importance assumed when a selected preference carries none.
    pub default_importance: u8,
    /// Multiplier for previously selected destinations.
    pub previous_selection_boost: f64,
}

impl ScoringConfig {
    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when a float is non-finite or negative,
    /// when the default weight exceeds `1.0`, or when the default importance
    /// exceeds `100`.
    ///
    /// # Examples
    /// ```
    /// use tripwise_scorer::{ScoringConfig, ScoringConfigError};
    ///
    /// let config = ScoringConfig {
    ///     previous_selection_boost: -1.0,
    ///     ..ScoringConfig::default()
    /// };
    /// assert!(matches!(
    ///     config.validate(),
    ///     Err(ScoringConfigError::InvalidValue { field: "previous_selection_boost", .. })
    /// ));
    /// ```
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        check_non_negative("default_weight", self.default_weight)?;
        check_non_negative("previous_selection_boost", self.previous_selection_boost)?;
        if self.default_weight > 1.0_f64 {
            return Err(ScoringConfigError::DefaultWeightAboveOne {
                value: self.default_weight,
            });
        }
        if self.default_importance > MAX_IMPORTANCE {
            return Err(ScoringConfigError::ImportanceOutOfRange {
                value: self.default_importance,
            });
        }
        Ok(self)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
            default_importance: DEFAULT_IMPORTANCE,
            previous_selection_boost: PREVIOUS_SELECTION_BOOST,
        }
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ScoringConfigError> {
    if value.is_finite() && value >= 0.0_f64 {
        Ok(())
    } else {
        Err(ScoringConfigError::InvalidValue { field, value })
    }
}

/// Errors raised when validating a [`ScoringConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringConfigError {
    /// A float was NaN, infinite or negative.
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// The default weight lies above the coefficient range.
    #[error("default_weight must not exceed 1.0, got {value}")]
    DefaultWeightAboveOne {
        /// Value supplied.
        value: f64,
    },
    /// The default importance lies above 100.
    #[error("default_importance must not exceed 100, got {value}")]
    ImportanceOutOfRange {
        /// Value supplied.
        value: u8,
    },
}
