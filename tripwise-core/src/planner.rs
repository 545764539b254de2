//! Expand a destination into a day-by-day itinerary.

use crate::{ItineraryDay, ItineraryRequest};

/// Build itineraries for a destination.
///
/// Implementations must return exactly `request.days` days numbered from
/// `1` upwards, and every emitted day and activity must carry an identifier
/// unique within the call. Unknown destinations degrade to generic content
/// instead of failing. Planners must be `Send + Sync`.
pub trait ItineraryPlanner: Send + Sync {
    /// Plan `request.days` days for `request.destination_id`.
    fn plan(&self, request: &ItineraryRequest) -> Vec<ItineraryDay>;
}
