//! Append-only record of destinations a caller has chosen.

/// Destination identifiers the caller selected, in first-selection order.
///
/// The history only grows: recording an identifier twice keeps the first
/// entry, and nothing is ever pruned. Recommenders read it to boost
/// previously chosen destinations.
///
/// # Examples
/// ```
/// use tripwise_core::SelectionHistory;
///
/// let mut history = SelectionHistory::new();
/// assert!(history.record("1"));
/// assert!(!history.record("1"));
/// assert!(history.contains("1"));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct SelectionHistory {
    ids: Vec<String>,
}

impl SelectionHistory {
    /// Construct an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Record a selection, returning `true` when the identifier is new.
    pub fn record(&mut self, destination_id: impl Into<String>) -> bool {
        let id = destination_id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Report whether a destination was selected before.
    #[must_use]
    pub fn contains(&self, destination_id: &str) -> bool {
        self.ids.iter().any(|id| id == destination_id)
    }

    /// Iterate over recorded identifiers in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of distinct recorded identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Report whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = Self::new();
        for id in iter {
            history.record(id);
        }
        history
    }
}

impl From<Vec<String>> for SelectionHistory {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SelectionHistory> for Vec<String> {
    fn from(history: SelectionHistory) -> Self {
        history.ids
    }
}
