//! Helpers a presentation layer applies to a ranked list.
//!
//! Everything here returns new values and leaves its inputs untouched.

use crate::Recommendation;

/// Filter recommendations by a free-text query.
///
/// Matching is a case-insensitive substring test against the name, the
/// location and every tag. A blank query keeps every entry. Ranking order is
/// preserved.
///
/// # Examples
/// ```
/// use tripwise_core::{Destination, Recommendation, search};
///
/// let ranked = vec![
///     Recommendation::unscored(Destination::new("1", "Kyoto", "Japan").with_tags(["Temples"])),
///     Recommendation::unscored(Destination::new("2", "Barcelona", "Spain").with_tags(["Beach"])),
/// ];
///
/// let hits = search(&ranked, "beach");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id(), "2");
/// assert_eq!(search(&ranked, "  ").len(), 2);
/// ```
#[must_use]
pub fn search(recommendations: &[Recommendation], query: &str) -> Vec<Recommendation> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return recommendations.to_vec();
    }
    recommendations
        .iter()
        .filter(|rec| matches_query(rec, &needle))
        .cloned()
        .collect()
}

fn matches_query(rec: &Recommendation, needle: &str) -> bool {
    let destination = &rec.destination;
    destination.name.to_lowercase().contains(needle)
        || destination.location.to_lowercase().contains(needle)
        || destination
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Return a copy of `recommendations` with the favourite flag of `id` flipped.
///
/// Unknown identifiers leave the list unchanged.
#[must_use]
pub fn toggle_favorite(recommendations: &[Recommendation], id: &str) -> Vec<Recommendation> {
    recommendations
        .iter()
        .map(|rec| {
            let mut copy = rec.clone();
            if copy.id() == id {
                copy.destination.is_favorite = !copy.destination.is_favorite;
            }
            copy
        })
        .collect()
}

/// Resolve an identifier, e.g. from a query parameter, against a ranked list.
#[must_use]
pub fn find_recommendation<'a>(
    recommendations: &'a [Recommendation],
    id: &str,
) -> Option<&'a Recommendation> {
    recommendations.iter().find(|rec| rec.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Destination;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ranked() -> Vec<Recommendation> {
        vec![
            Recommendation::scored(
                Destination::new("4", "New York City", "USA").with_tags(["Urban", "Shopping"]),
                0.7,
            ),
            Recommendation::scored(
                Destination::new("7", "Marrakech", "Morocco").with_tags(["Culture", "Shopping"]),
                0.5,
            ),
            Recommendation::scored(
                Destination::new("5", "Bali", "Indonesia").with_tags(["Beach", "Nature"]),
                0.4,
            ),
        ]
    }

    #[rstest]
    #[case("shop", &["4", "7"])]
    #[case("MOROCCO", &["7"])]
    #[case("new york", &["4"])]
    #[case("ski", &[])]
    fn search_matches_name_location_and_tags(
        ranked: Vec<Recommendation>,
        #[case] query: &str,
        #[case] expected: &[&str],
    ) {
        let ids: Vec<String> = search(&ranked, query)
            .iter()
            .map(|rec| rec.id().to_owned())
            .collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    fn toggle_favorite_flips_only_the_target(ranked: Vec<Recommendation>) {
        let toggled = toggle_favorite(&ranked, "7");
        let flags: Vec<bool> = toggled.iter().map(|rec| rec.destination.is_favorite).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert!(ranked.iter().all(|rec| !rec.destination.is_favorite));

        let restored = toggle_favorite(&toggled, "7");
        assert_eq!(restored, ranked);
    }

    #[rstest]
    fn find_recommendation_resolves_ids(ranked: Vec<Recommendation>) {
        assert_eq!(
            find_recommendation(&ranked, "5").map(|rec| rec.destination.name.as_str()),
            Some("Bali")
        );
        assert!(find_recommendation(&ranked, "99").is_none());
    }
}
