//! Fallback activities for destinations without templates.

use tripwise_core::ActivityTemplate;

/// Number of generic activities planned per day.
pub const GENERIC_ACTIVITY_COUNT: usize = 4;

/// The generic day used when a destination has no templates.
///
/// `destination_name` is woven into the morning title and used as the
/// location of the morning and afternoon slots.
///
/// # Examples
/// ```
/// use tripwise_planner::generic_activities;
///
/// let day = generic_activities("Rome");
/// assert_eq!(day[0].title, "Morning exploration in Rome");
/// assert_eq!(day[3].time, "17:30");
/// ```
#[must_use]
pub fn generic_activities(destination_name: &str) -> [ActivityTemplate; GENERIC_ACTIVITY_COUNT] {
    [
        ActivityTemplate::new(
            "09:00",
            format!("Morning exploration in {destination_name}"),
            "Explore the main attractions and landmarks.",
            destination_name,
            "3h",
        ),
        ActivityTemplate::new(
            "12:30",
            "Local lunch experience",
            "Try authentic local cuisine at a recommended restaurant.",
            "City center",
            "1h 30m",
        ),
        ActivityTemplate::new(
            "14:30",
            "Cultural activity",
            "Visit a museum, gallery, or historical site.",
            destination_name,
            "2h",
        ),
        ActivityTemplate::new(
            "17:30",
            "Evening relaxation",
            "Enjoy scenic views and local atmosphere.",
            "Various locations",
            "2h",
        ),
    ]
}
