//! `RotatingPlanner` implementation.

use std::sync::Arc;

use tripwise_core::{
    ActivityTemplate, Catalog, IdGenerator, ItineraryActivity, ItineraryDay, ItineraryPlanner,
    ItineraryRequest, UuidIdGenerator,
};

use crate::generic_activities;

/// Upper bound on template activities scheduled in a single day.
pub const MAX_ACTIVITIES_PER_DAY: usize = 4;

/// Planner that rotates through a destination's activity templates.
///
/// Day `i` (1-based) starts at template `((i - 1) * per_day) mod n`, where
/// `n` is the template count and `per_day = min(4, n)`, and walks forward
/// with wraparound. Every emitted day and activity receives a fresh
/// identifier from the planner's [`IdGenerator`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use tripwise_core::{Catalog, ItineraryPlanner, ItineraryRequest};
/// use tripwise_planner::RotatingPlanner;
///
/// let planner = RotatingPlanner::new(Arc::new(Catalog::builtin()));
/// let days = planner.plan(&ItineraryRequest::new("1").with_days(2));
///
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[0].activities[0].title, "Fushimi Inari Shrine");
/// ```
#[derive(Debug, Clone)]
pub struct RotatingPlanner<G = UuidIdGenerator>
where
    G: IdGenerator,
{
    catalog: Arc<Catalog>,
    ids: G,
}

impl RotatingPlanner {
    /// Construct a planner that issues UUID v4 identifiers.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_id_generator(catalog, UuidIdGenerator)
    }
}

impl<G> RotatingPlanner<G>
where
    G: IdGenerator,
{
    /// Construct a planner with an explicit identifier source.
    #[must_use]
    pub const fn with_id_generator(catalog: Arc<Catalog>, ids: G) -> Self {
        Self { catalog, ids }
    }

    /// Catalog the planner reads templates and names from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn instantiate<'a, I>(&self, templates: I) -> Vec<ItineraryActivity>
    where
        I: IntoIterator<Item = &'a ActivityTemplate>,
    {
        templates
            .into_iter()
            .map(|template| ItineraryActivity::from_template(self.ids.next_id(), template))
            .collect()
    }

    fn rotated_day(
        &self,
        templates: &[ActivityTemplate],
        day_index: usize,
    ) -> Vec<ItineraryActivity> {
        let per_day = templates.len().min(MAX_ACTIVITIES_PER_DAY);
        let start = day_index
            .saturating_mul(per_day)
            .checked_rem(templates.len())
            .unwrap_or_default();
        self.instantiate(templates.iter().cycle().skip(start).take(per_day))
    }
}

impl<G> ItineraryPlanner for RotatingPlanner<G>
where
    G: IdGenerator,
{
    fn plan(&self, request: &ItineraryRequest) -> Vec<ItineraryDay> {
        let destination_id = request.destination_id.as_str();
        let templates = self.catalog.activities(destination_id);
        if templates.is_empty() {
            if self.catalog.destination(destination_id).is_none() {
                log::warn!(
                    "destination '{destination_id}' is not in the catalog; planning generic activities"
                );
            } else {
                log::debug!(
                    "destination '{destination_id}' has no activity templates; planning generic activities"
                );
            }
        }
        let generic = generic_activities(self.catalog.display_name(destination_id));

        let days: Vec<ItineraryDay> = (1..=request.days)
            .zip(0_usize..)
            .map(|(day_number, day_index)| {
                let day_id = self.ids.next_id();
                let activities = if templates.is_empty() {
                    self.instantiate(&generic)
                } else {
                    self.rotated_day(templates, day_index)
                };
                ItineraryDay::new(day_id, day_number, activities)
            })
            .collect();

        log::debug!(
            "planned {} days for destination '{destination_id}' from {} templates",
            days.len(),
            templates.len()
        );
        days
    }
}
