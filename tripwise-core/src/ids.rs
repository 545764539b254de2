//! Identifier generation for itinerary entities.
//!
//! Planners stamp every emitted day and activity with a fresh identifier.
//! The capability is injected so tests can swap in a deterministic sequence
//! (see `test_support::SequentialIdGenerator`).

use uuid::Uuid;

/// Produce identifiers that are unique for the lifetime of the process.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and must never hand
/// out the same identifier twice, even when called concurrently.
///
/// # Examples
/// ```
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use tripwise_core::IdGenerator;
///
/// struct Counter(AtomicU32);
///
/// impl IdGenerator for Counter {
///     fn next_id(&self) -> String {
///         self.0.fetch_add(1, Ordering::Relaxed).to_string()
///     }
/// }
///
/// let ids = Counter(AtomicU32::new(0));
/// assert_eq!(ids.next_id(), "0");
/// assert_eq!(ids.next_id(), "1");
/// ```
pub trait IdGenerator: Send + Sync {
    /// Return a new identifier.
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers, the production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
