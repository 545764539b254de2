//! User-tunable preference dimensions.
//!
//! Preference lists are owned by the caller. The helpers here follow a
//! copy-on-mutate pattern: they return an updated list and leave the input
//! untouched, so callers replace their own state with the result.

/// Importance assumed when a selected preference carries none.
pub const DEFAULT_IMPORTANCE: u8 = 50;

/// Upper bound of the importance scale.
pub const MAX_IMPORTANCE: u8 = 100;

const DEFAULT_LABELS: [&str; 10] = [
    "Art & Culture",
    "Food & Dining",
    "Nature & Outdoors",
    "Architecture",
    "Adventure",
    "Beach & Water",
    "Nightlife",
    "Local Experience",
    "Shopping",
    "Wine & Drinks",
];

/// A preference dimension with an on/off flag and an importance.
///
/// Importance is expressed on a `0..=100` scale. Values above
/// [`MAX_IMPORTANCE`] are clamped when read through
/// [`Preference::importance_or`].
///
/// # Examples
/// ```
/// use tripwise_core::{DEFAULT_IMPORTANCE, Preference};
///
/// let food = Preference::new("2").with_selected(true);
/// assert_eq!(food.importance_or(DEFAULT_IMPORTANCE), 50);
///
/// let art = Preference::new("1").with_importance(80);
/// assert_eq!(art.importance_or(DEFAULT_IMPORTANCE), 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preference {
    /// Identifier matched against catalog weight tables.
    pub id: String,
    /// Human-readable label, when known.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
    /// Whether the preference takes part in scoring.
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected: bool,
    /// Importance on the `0..=100` scale, if the caller set one.
    ///
    /// JSON accepts any number here; fractions are rounded and
    /// out-of-range values clamped.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "lenient_importance",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub importance: Option<u8>,
}

/// Accept any JSON number for an importance and clamp it into `0..=100`.
#[cfg(feature = "serde")]
fn lenient_importance<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<f64> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.map(clamp_importance))
}

#[cfg(feature = "serde")]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped into 0..=100 before the cast"
)]
fn clamp_importance(raw: f64) -> u8 {
    raw.round().clamp(0.0, f64::from(MAX_IMPORTANCE)) as u8
}

impl Preference {
    /// Construct an unselected preference without a label or importance.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            selected: false,
            importance: None,
        }
    }

    /// Attach a display label while returning `self` for chaining.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the selection flag while returning `self` for chaining.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the importance while returning `self` for chaining.
    ///
    /// Values are clamped into `0..=100`.
    #[must_use]
    pub fn with_importance(mut self, importance: u8) -> Self {
        self.importance = Some(importance.min(MAX_IMPORTANCE));
        self
    }

    /// Return the importance, falling back to `default` when unset.
    ///
    /// The result never exceeds [`MAX_IMPORTANCE`], even when the value
    /// arrived unclamped through deserialization.
    #[must_use]
    pub fn importance_or(&self, default: u8) -> u8 {
        self.importance.unwrap_or(default).min(MAX_IMPORTANCE)
    }
}

/// Return the ten built-in preferences, all unselected at default importance.
///
/// Identifiers run from `"1"` to `"10"` and line up with the weight tables
/// of the built-in catalog.
///
/// # Examples
/// ```
/// use tripwise_core::default_preferences;
///
/// let preferences = default_preferences();
/// assert_eq!(preferences.len(), 10);
/// assert_eq!(preferences[0].label.as_deref(), Some("Art & Culture"));
/// assert!(preferences.iter().all(|p| !p.selected));
/// ```
#[must_use]
pub fn default_preferences() -> Vec<Preference> {
    DEFAULT_LABELS
        .iter()
        .zip(1_u8..)
        .map(|(label, id)| {
            Preference::new(id.to_string())
                .with_label(*label)
                .with_importance(DEFAULT_IMPORTANCE)
        })
        .collect()
}

/// Return a copy of `preferences` with the selection flag of `id` flipped.
///
/// Unknown identifiers leave the list unchanged.
///
/// # Examples
/// ```
/// use tripwise_core::{Preference, toggle_preference};
///
/// let before = vec![Preference::new("1"), Preference::new("2")];
/// let after = toggle_preference(&before, "2");
/// assert!(!after[0].selected);
/// assert!(after[1].selected);
/// assert!(!before[1].selected);
/// ```
#[must_use]
pub fn toggle_preference(preferences: &[Preference], id: &str) -> Vec<Preference> {
    preferences
        .iter()
        .map(|preference| {
            if preference.id == id {
                preference.clone().with_selected(!preference.selected)
            } else {
                preference.clone()
            }
        })
        .collect()
}

/// Return a copy of `preferences` with the importance of `id` replaced.
///
/// `importance` is clamped into `0..=100`; unknown identifiers leave the
/// list unchanged.
#[must_use]
pub fn set_importance(preferences: &[Preference], id: &str, importance: u8) -> Vec<Preference> {
    preferences
        .iter()
        .map(|preference| {
            if preference.id == id {
                preference.clone().with_importance(importance)
            } else {
                preference.clone()
            }
        })
        .collect()
}
