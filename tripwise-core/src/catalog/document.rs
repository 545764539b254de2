//! Serializable catalog shape for loading alternate catalogs from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogError};
use crate::{ActivityTemplate, Destination, PreferenceWeights};

/// Wire format of a [`Catalog`].
///
/// Deserializing a document performs no validation; convert it with
/// [`Catalog::try_from`] to enforce the catalog invariants.
///
/// # Examples
/// ```
/// use tripwise_core::{Catalog, CatalogDocument};
///
/// let json = r#"{
///     "destinations": [
///         {"id": "x", "name": "Xanadu", "location": "Nowhere", "rating": 4.2}
///     ],
///     "weights": {"x": {"1": 0.6}}
/// }"#;
/// let document: CatalogDocument = serde_json::from_str(json).unwrap();
/// let catalog = Catalog::try_from(document).unwrap();
/// assert_eq!(catalog.weights("x").and_then(|w| w.weight("1")), Some(0.6));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Destinations in catalog order.
    pub destinations: Vec<Destination>,
    /// Weight tables keyed by destination id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<String, PreferenceWeights>,
    /// Activity templates keyed by destination id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub activities: BTreeMap<String, Vec<ActivityTemplate>>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        let catalog = Self {
            destinations: document.destinations,
            weights: document.weights,
            activities: document.activities,
        };
        catalog.validate()?;
        log::debug!(
            "loaded catalog with {} destinations, {} weight tables, {} activity lists",
            catalog.destinations.len(),
            catalog.weights.len(),
            catalog.activities.len()
        );
        Ok(catalog)
    }
}

impl From<&Catalog> for CatalogDocument {
    fn from(catalog: &Catalog) -> Self {
        Self {
            destinations: catalog.destinations.clone(),
            weights: catalog.weights.clone(),
            activities: catalog.activities.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn builtin_catalog_survives_json() {
        let builtin = Catalog::builtin();
        let json = serde_json::to_string(&CatalogDocument::from(&builtin)).expect("serialize");
        let document: CatalogDocument = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(Catalog::try_from(document), Ok(builtin));
    }

    #[rstest]
    fn conversion_rejects_out_of_range_weights() {
        let json = r#"{
            "destinations": [{"id": "x", "name": "X", "location": "Y", "rating": 3.0}],
            "weights": {"x": {"p": 1.5}}
        }"#;
        let document: CatalogDocument = serde_json::from_str(json).expect("deserialize");
        let err = Catalog::try_from(document).expect_err("weight 1.5 is invalid");
        assert!(matches!(err, CatalogError::WeightOutOfRange { .. }));
    }

    #[rstest]
    fn conversion_rejects_dangling_activities() {
        let json = r#"{
            "destinations": [{"id": "x", "name": "X", "location": "Y", "rating": 3.0}],
            "activities": {"z": []}
        }"#;
        let document: CatalogDocument = serde_json::from_str(json).expect("deserialize");
        let err = Catalog::try_from(document).expect_err("z is not listed");
        assert_eq!(
            err,
            CatalogError::UnknownDestination {
                table: "activities",
                id: "z".into(),
            }
        );
    }
}
