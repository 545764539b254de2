//! Unit coverage for weighted recommendation.
#![forbid(unsafe_code)]

use std::sync::Arc;

use rstest::{fixture, rstest};
use tripwise_core::test_support::small_catalog;
use tripwise_core::{Catalog, Preference, Recommendation, Recommender, SelectionHistory};

use crate::{ScoringConfig, ScoringConfigError, WeightedRecommender};

#[fixture]
fn small() -> WeightedRecommender {
    WeightedRecommender::new(Arc::new(small_catalog().expect("small catalog is valid")))
}

#[fixture]
fn builtin() -> WeightedRecommender {
    WeightedRecommender::new(Arc::new(Catalog::builtin()))
}

fn selected(id: &str, importance: u8) -> Preference {
    Preference::new(id)
        .with_selected(true)
        .with_importance(importance)
}

fn ids(ranked: &[Recommendation]) -> Vec<&str> {
    ranked.iter().map(Recommendation::id).collect()
}

fn score_of(ranked: &[Recommendation], id: &str) -> f64 {
    ranked
        .iter()
        .find(|rec| rec.id() == id)
        .and_then(|rec| rec.score)
        .expect("destination is scored")
}

fn exact_score(ranked: &[Recommendation], id: &str) -> Option<f64> {
    ranked.iter().find(|rec| rec.id() == id).and_then(|rec| rec.score)
}

#[expect(clippy::float_arithmetic, reason = "tests compare floats with a tolerance")]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-5_f64,
        "expected approximately {expected}, got {actual}"
    );
}

#[rstest]
fn no_selection_orders_by_rating(small: WeightedRecommender) {
    let preferences = [Preference::new("p1").with_importance(100)];

    let ranked = small.recommend(&preferences, &SelectionHistory::new());

    // a and c tie on 4.0 and keep catalog order.
    assert_eq!(ids(&ranked), ["b", "a", "c"]);
    assert!(ranked.iter().all(|rec| rec.score.is_none()));
}

#[rstest]
fn empty_preferences_ignore_history(small: WeightedRecommender) {
    let history: SelectionHistory = ["c"].into_iter().collect();

    let ranked = small.recommend(&[], &history);

    assert_eq!(ids(&ranked), ["b", "a", "c"]);
}

#[rstest]
fn kyoto_art_and_culture_scores_its_weight(builtin: WeightedRecommender) {
    let ranked = builtin.recommend(&[selected("1", 100)], &SelectionHistory::new());

    assert_eq!(ranked.first().map(Recommendation::id), Some("1"));
    assert_eq!(exact_score(&ranked, "1"), Some(0.9));
    assert_eq!(exact_score(&ranked, "2"), Some(0.7));
    assert_eq!(exact_score(&ranked, "3"), Some(0.3));
    // Unweighted destinations tie on the default and keep catalog order.
    assert_eq!(ids(&ranked), ["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[rstest]
fn previous_selection_boosts_score(builtin: WeightedRecommender) {
    let mut history = SelectionHistory::new();
    history.record("1");

    let ranked = builtin.recommend(&[selected("1", 100)], &history);

    assert_eq!(exact_score(&ranked, "1"), Some(1.08));
}

#[rstest]
fn double_precision_breaks_near_ties(builtin: WeightedRecommender) {
    // Kyoto sums 0.35 + 0.5 = 0.85; Barcelona sums 0.45 + 0.4, which lands
    // one ulp above 0.85 in double precision.
    let preferences = [selected("2", 50), selected("3", 100)];

    let ranked = builtin.recommend(&preferences, &SelectionHistory::new());

    assert_eq!(ids(&ranked).get(..2), Some(&["2", "1"][..]));
    assert_eq!(exact_score(&ranked, "1"), Some(0.85));
    assert!(score_of(&ranked, "2") > score_of(&ranked, "1"));
}

#[rstest]
fn boost_can_reorder_destinations(builtin: WeightedRecommender) {
    // Beach: Barcelona 0.8, unweighted 0.3, Kyoto 0.2. Boosted Santorini
    // reaches 0.36 and leads the unweighted group.
    let history: SelectionHistory = ["3"].into_iter().collect();

    let ranked = builtin.recommend(&[selected("6", 100)], &history);

    let order = ids(&ranked);
    let santorini = order.iter().position(|id| *id == "3");
    let kyoto = order.iter().position(|id| *id == "1");
    assert!(santorini < kyoto, "boosted Santorini must outrank Kyoto: {order:?}");
    assert_eq!(order.first(), Some(&"2"));
}

#[rstest]
fn missing_importance_defaults_to_fifty(small: WeightedRecommender) {
    let preferences = [Preference::new("p1").with_selected(true)];

    let ranked = small.recommend(&preferences, &SelectionHistory::new());

    assert_close(score_of(&ranked, "a"), 0.5);
    assert_close(score_of(&ranked, "b"), 0.1);
    assert_close(score_of(&ranked, "c"), 0.15);
}

#[rstest]
fn zero_importance_zeroes_scores_and_keeps_catalog_order(small: WeightedRecommender) {
    let ranked = small.recommend(&[selected("p1", 0)], &SelectionHistory::new());

    assert_eq!(ids(&ranked), ["a", "b", "c"]);
    assert!(ranked.iter().all(|rec| rec.score == Some(0.0)));
}

#[rstest]
fn unknown_preferences_use_default_weight(small: WeightedRecommender) {
    let ranked = small.recommend(&[selected("zzz", 100)], &SelectionHistory::new());

    for id in ["a", "b", "c"] {
        assert_close(score_of(&ranked, id), 0.3);
    }
}

#[rstest]
fn selected_preferences_accumulate(small: WeightedRecommender) {
    let ranked = small.recommend(
        &[selected("p1", 100), selected("p2", 50)],
        &SelectionHistory::new(),
    );

    // a: 1.0 + 0.5 * 0.5, b: 0.2 + 0.3 * 0.5, c: 0.3 + 0.3 * 0.5.
    assert_close(score_of(&ranked, "a"), 1.25);
    assert_close(score_of(&ranked, "b"), 0.35);
    assert_close(score_of(&ranked, "c"), 0.45);
    assert_eq!(ids(&ranked), ["a", "c", "b"]);
}

#[rstest]
fn inputs_are_left_untouched(small: WeightedRecommender) {
    let preferences = vec![selected("p1", 100)];
    let history: SelectionHistory = ["a"].into_iter().collect();
    let before = (preferences.clone(), history.clone());

    let _ranked = small.recommend(&preferences, &history);

    assert_eq!((preferences, history), before);
    assert!(small.catalog().destinations().iter().all(|d| !d.is_favorite));
}

#[rstest]
fn custom_default_weight_applies(small: WeightedRecommender) {
    let config = ScoringConfig {
        default_weight: 0.0,
        ..ScoringConfig::default()
    };
    let tuned = WeightedRecommender::with_config(Arc::new(small.catalog().clone()), config)
        .expect("valid config");

    let ranked = tuned.recommend(&[selected("p2", 100)], &SelectionHistory::new());

    assert_close(score_of(&ranked, "a"), 0.5);
    assert_close(score_of(&ranked, "b"), 0.0);
}

#[rstest]
#[case(ScoringConfig { default_weight: f64::NAN, ..ScoringConfig::default() }, "default_weight")]
#[case(ScoringConfig { default_weight: -0.1, ..ScoringConfig::default() }, "default_weight")]
#[case(
    ScoringConfig { previous_selection_boost: f64::INFINITY, ..ScoringConfig::default() },
    "previous_selection_boost"
)]
fn rejects_invalid_floats(#[case] config: ScoringConfig, #[case] expected: &str) {
    let err = config.validate().expect_err("config must be rejected");
    assert!(
        matches!(err, ScoringConfigError::InvalidValue { field, .. } if field == expected),
        "unexpected error {err:?}"
    );
}

#[rstest]
fn rejects_default_weight_above_one() {
    let config = ScoringConfig {
        default_weight: 1.5,
        ..ScoringConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ScoringConfigError::DefaultWeightAboveOne { value: 1.5 })
    );
}

#[rstest]
fn rejects_importance_above_hundred() {
    let config = ScoringConfig {
        default_importance: 101,
        ..ScoringConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ScoringConfigError::ImportanceOutOfRange { value: 101 })
    );
}

#[rstest]
fn default_config_is_valid() {
    let config = ScoringConfig::default();
    assert_eq!(config.validate(), Ok(config));
    assert_eq!(config.default_importance, 50);
}
