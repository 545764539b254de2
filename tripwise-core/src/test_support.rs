//! Deterministic doubles for unit and behaviour tests.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{ActivityTemplate, Catalog, CatalogError, Destination, IdGenerator, PreferenceWeights};

/// `IdGenerator` yielding `prefix-1`, `prefix-2`, ...
///
/// The counter is atomic, so a shared instance stays collision-free across
/// threads.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator whose identifiers start with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst).saturating_sub(1)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{n}", self.prefix)
    }
}

/// Build an activity template whose fields derive from `title`.
#[must_use]
pub fn template(time: &str, title: &str) -> ActivityTemplate {
    ActivityTemplate::new(
        time,
        title,
        format!("{title} description"),
        format!("{title} location"),
        "1h",
    )
}

/// A three-destination catalog used where the built-in data is too large.
///
/// - `a` "Alpha" rated 4.0, weight `p1 = 1.0`, `p2 = 0.5`, two templates;
/// - `b` "Bravo" rated 4.5, weight `p1 = 0.2`, six templates;
/// - `c` "Charlie" rated 4.0, no weights, no templates.
///
/// # Errors
/// Never fails for the fixed data; the `Result` mirrors [`Catalog::new`].
pub fn small_catalog() -> Result<Catalog, CatalogError> {
    let destinations = vec![
        Destination::new("a", "Alpha", "Nowhere").with_rating(4.0),
        Destination::new("b", "Bravo", "Elsewhere").with_rating(4.5),
        Destination::new("c", "Charlie", "Somewhere").with_rating(4.0),
    ];
    let bravo_templates = ["08:00", "10:00", "12:00", "14:00", "16:00", "18:00"]
        .iter()
        .enumerate()
        .map(|(index, time)| template(time, &format!("Bravo {index}")))
        .collect();
    Catalog::new(destinations)?
        .with_weights(
            "a",
            PreferenceWeights::new()
                .with_weight("p1", 1.0)
                .with_weight("p2", 0.5),
        )?
        .with_weights("b", PreferenceWeights::new().with_weight("p1", 0.2))?
        .with_activities(
            "a",
            vec![template("09:00", "Alpha 0"), template("13:00", "Alpha 1")],
        )?
        .with_activities("b", bravo_templates)
}
