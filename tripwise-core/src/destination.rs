//! Catalog destinations and their ranked counterparts.

/// A travel destination listed in the catalog.
///
/// `is_favorite` belongs to the caller: the engine copies it through
/// untouched and never flips it.
///
/// # Examples
/// ```
/// use tripwise_core::Destination;
///
/// let kyoto = Destination::new("1", "Kyoto", "Japan")
///     .with_tags(["Culture", "History"])
///     .with_rating(4.8);
///
/// assert_eq!(kyoto.id, "1");
/// assert_eq!(kyoto.tags, vec!["Culture".to_owned(), "History".to_owned()]);
/// assert!(!kyoto.is_favorite);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Destination {
    /// Stable, unique catalog identifier.
    pub id: String,
    /// Display name, e.g. "Kyoto".
    pub name: String,
    /// Country or region shown next to the name.
    pub location: String,
    /// Short marketing description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Image reference (usually a URL).
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
    /// Ordered descriptive tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Suggested stay, e.g. "5-7 days".
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: String,
    /// Average rating in `0.0..=5.0`.
    pub rating: f64,
    /// Caller-managed favourite flag.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_favorite: bool,
}

impl Destination {
    /// Construct a destination with the required display fields.
    ///
    /// The remaining fields start empty and the rating at `0.0`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            duration: String::new(),
            rating: 0.0,
            is_favorite: false,
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference while returning `self` for chaining.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Replace the tags while returning `self` for chaining.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the suggested stay while returning `self` for chaining.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set the rating while returning `self` for chaining.
    ///
    /// The value is stored as given; [`Catalog`](crate::Catalog) rejects
    /// ratings outside `0.0..=5.0`.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}

/// A destination copy annotated with its relevance score.
///
/// `score` is `None` when the ranking was produced without any selected
/// preference, in which case the order reflects ratings alone.
///
/// # Examples
/// ```
/// use tripwise_core::{Destination, Recommendation};
///
/// let rec = Recommendation::scored(Destination::new("1", "Kyoto", "Japan"), 0.9);
/// assert_eq!(rec.id(), "1");
/// assert_eq!(rec.score, Some(0.9));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// The ranked destination.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub destination: Destination,
    /// Transient relevance score; never persisted.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub score: Option<f64>,
}

impl Recommendation {
    /// Wrap a destination without a score.
    #[must_use]
    pub const fn unscored(destination: Destination) -> Self {
        Self {
            destination,
            score: None,
        }
    }

    /// Wrap a destination with a computed score.
    #[must_use]
    pub const fn scored(destination: Destination, score: f64) -> Self {
        Self {
            destination,
            score: Some(score),
        }
    }

    /// Identifier of the wrapped destination.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.destination.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn builder_sets_every_field() {
        let destination = Destination::new("7", "Marrakech", "Morocco")
            .with_description("Markets and palaces.")
            .with_image("marrakech.jpg")
            .with_tags(["Culture", "Shopping"])
            .with_duration("3-5 days")
            .with_rating(4.4);

        assert_eq!(destination.description, "Markets and palaces.");
        assert_eq!(destination.image, "marrakech.jpg");
        assert_eq!(destination.tags.len(), 2);
        assert_eq!(destination.duration, "3-5 days");
        assert_eq!(destination.rating, 4.4);
    }

    #[rstest]
    fn unscored_recommendation_has_no_score() {
        let rec = Recommendation::unscored(Destination::new("1", "Kyoto", "Japan"));
        assert!(rec.score.is_none());
        assert_eq!(rec.id(), "1");
    }
}
