//! Itinerary days, activities and the templates they are cloned from.

/// Number of days planned when a request does not say otherwise.
pub const DEFAULT_ITINERARY_DAYS: u16 = 3;

/// A canonical, reusable activity description.
///
/// Templates carry no identifier. Each time a planner emits one it becomes
/// a distinct [`ItineraryActivity`] with a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityTemplate {
    /// Time of day, e.g. `"09:00"`.
    pub time: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Where the activity happens.
    pub location: String,
    /// Human-readable duration, e.g. `"1h 30m"`.
    pub duration: String,
}

impl ActivityTemplate {
    /// Construct a template from its display fields.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::ActivityTemplate;
    ///
    /// let tea = ActivityTemplate::new(
    ///     "16:30",
    ///     "Tea Ceremony",
    ///     "A traditional ceremony with a local master.",
    ///     "Gion District",
    ///     "1h 30m",
    /// );
    /// assert_eq!(tea.time, "16:30");
    /// ```
    #[must_use]
    pub fn new(
        time: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            title: title.into(),
            description: description.into(),
            location: location.into(),
            duration: duration.into(),
        }
    }
}

/// One scheduled activity inside an [`ItineraryDay`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItineraryActivity {
    /// Identifier unique to this emission of the activity.
    pub id: String,
    /// Time of day.
    pub time: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Where the activity happens.
    pub location: String,
    /// Human-readable duration.
    pub duration: String,
    /// Set for entries the caller added by hand; planners never set it.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "std::ops::Not::not")
    )]
    pub is_custom: bool,
}

impl ItineraryActivity {
    /// Instantiate a template under the given identifier.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::{ActivityTemplate, ItineraryActivity};
    ///
    /// let template = ActivityTemplate::new("09:00", "Walk", "", "Old town", "2h");
    /// let activity = ItineraryActivity::from_template("a-1", &template);
    /// assert_eq!(activity.id, "a-1");
    /// assert_eq!(activity.title, "Walk");
    /// assert!(!activity.is_custom);
    /// ```
    #[must_use]
    pub fn from_template(id: impl Into<String>, template: &ActivityTemplate) -> Self {
        Self {
            id: id.into(),
            time: template.time.clone(),
            title: template.title.clone(),
            description: template.description.clone(),
            location: template.location.clone(),
            duration: template.duration.clone(),
            is_custom: false,
        }
    }

    /// Instantiate a caller-authored activity, flagged as custom.
    #[must_use]
    pub fn custom(id: impl Into<String>, template: &ActivityTemplate) -> Self {
        Self {
            is_custom: true,
            ..Self::from_template(id, template)
        }
    }
}

/// A single day of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItineraryDay {
    /// Identifier of the day.
    pub id: String,
    /// 1-based position within the itinerary.
    pub day_number: u16,
    /// Activities in schedule order.
    pub activities: Vec<ItineraryActivity>,
}

impl ItineraryDay {
    /// Construct a day from its activities.
    #[must_use]
    pub fn new(id: impl Into<String>, day_number: u16, activities: Vec<ItineraryActivity>) -> Self {
        Self {
            id: id.into(),
            day_number,
            activities,
        }
    }

    /// Append a caller-authored activity to the end of the day.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::{ActivityTemplate, ItineraryDay};
    ///
    /// let mut day = ItineraryDay::new("day-1", 1, Vec::new());
    /// let dinner = ActivityTemplate::new("19:00", "Dinner", "", "Harbour", "2h");
    /// day.add_custom_activity("custom-1", &dinner);
    /// assert!(day.activities[0].is_custom);
    /// ```
    pub fn add_custom_activity(&mut self, id: impl Into<String>, template: &ActivityTemplate) {
        self.activities.push(ItineraryActivity::custom(id, template));
    }

    /// Remove an activity by identifier, returning it when found.
    pub fn remove_activity(&mut self, activity_id: &str) -> Option<ItineraryActivity> {
        let position = self
            .activities
            .iter()
            .position(|activity| activity.id == activity_id)?;
        Some(self.activities.remove(position))
    }
}

/// Parameters for an itinerary plan.
///
/// `preferences` travels with the request so planners can weigh activities
/// against them; the rotating planner accepts but does not consult them.
///
/// # Examples
/// ```
/// use tripwise_core::{DEFAULT_ITINERARY_DAYS, ItineraryRequest};
///
/// let request = ItineraryRequest::new("1");
/// assert_eq!(request.days, DEFAULT_ITINERARY_DAYS);
/// assert!(request.preferences.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItineraryRequest {
    /// Destination to plan for; unknown ids fall back to generic activities.
    pub destination_id: String,
    /// Caller preferences at the time of the request.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: Vec<crate::Preference>,
    /// Number of days to plan; `0` yields an empty itinerary.
    #[cfg_attr(feature = "serde", serde(default = "default_days"))]
    pub days: u16,
}

#[cfg(feature = "serde")]
const fn default_days() -> u16 {
    DEFAULT_ITINERARY_DAYS
}

impl ItineraryRequest {
    /// Construct a request for the default number of days.
    #[must_use]
    pub fn new(destination_id: impl Into<String>) -> Self {
        Self {
            destination_id: destination_id.into(),
            preferences: Vec::new(),
            days: DEFAULT_ITINERARY_DAYS,
        }
    }

    /// Set the number of days while returning `self` for chaining.
    #[must_use]
    pub fn with_days(mut self, days: u16) -> Self {
        self.days = days;
        self
    }

    /// Attach caller preferences while returning `self` for chaining.
    #[must_use]
    pub fn with_preferences(mut self, preferences: Vec<crate::Preference>) -> Self {
        self.preferences = preferences;
        self
    }
}
