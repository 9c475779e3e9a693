use pitwall_belief::{BeliefStore, PriorSet, Projector, UpdateEngine};
use pitwall_core::config::{PitwallConfig, ProjectionConfig};
use pitwall_core::errors::ConfigError;
use test_fixtures::{finishing_order, priors, small_field};

#[test]
fn untouched_beliefs_project_to_inverse_of_prior_mu() {
    let store = PriorSet::season_2026().into_store().unwrap();
    let rows = Projector::default().project(store.iter());

    assert_eq!(rows.len(), store.len());
    for row in &rows {
        let prior = &store.get(&row.entity_id).unwrap().prior;
        assert_eq!(row.predicted_rank_value, 21.0 - prior.mu);
        assert_eq!(row.n_observations, 0);
    }
}

#[test]
fn rows_are_sorted_best_first_with_dense_ranks() {
    let store = BeliefStore::from_priors(small_field()).unwrap();
    let rows = Projector::default().project(store.iter());

    let order: Vec<&str> = rows.iter().map(|r| r.entity_id.as_str()).collect();
    assert_eq!(order, ["x", "y", "z"]);
    for (idx, row) in rows.iter().enumerate() {
        assert_eq!(row.predicted_rank, idx + 1);
    }
    assert!(rows
        .windows(2)
        .all(|w| w[0].predicted_rank_value <= w[1].predicted_rank_value));
}

#[test]
fn interval_brackets_point_and_stays_in_range() {
    let store = BeliefStore::from_priors(small_field()).unwrap();
    for row in Projector::default().project(store.iter()) {
        assert!(row.ci_lower <= row.predicted_rank_value);
        assert!(row.predicted_rank_value <= row.ci_upper);
        assert!(row.ci_lower >= 1.0 && row.ci_upper <= 20.0);
    }
}

#[test]
fn mid_field_interval_is_unclamped_width() {
    let store = BeliefStore::from_priors(priors(&[("m", 10.0, 2.0)])).unwrap();
    let row = &Projector::default().project(store.iter())[0];
    assert_eq!(row.predicted_rank_value, 11.0);
    assert!((row.ci_lower - (11.0 - 3.92)).abs() < 1e-12);
    assert!((row.ci_upper - (11.0 + 3.92)).abs() < 1e-12);
}

#[test]
fn ci_z_follows_config() {
    let projector = Projector::new(
        20,
        ProjectionConfig {
            ci_z: 1.0,
            ..Default::default()
        },
    );
    let store = BeliefStore::from_priors(priors(&[("m", 10.0, 2.0)])).unwrap();
    let row = &projector.project(store.iter())[0];
    assert_eq!(row.ci_lower, 9.0);
    assert_eq!(row.ci_upper, 13.0);
}

#[test]
fn projection_is_idempotent() {
    let mut store = BeliefStore::from_priors(small_field()).unwrap();
    let mut engine = UpdateEngine::new();
    engine
        .apply(&mut store, &finishing_order(&["z", "x", "y"]), 1.0, "Race")
        .unwrap();

    let projector = Projector::default();
    let first = serde_json::to_string(&projector.project(store.iter())).unwrap();
    let second = serde_json::to_string(&projector.project(store.iter())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn project_priors_ignores_updates() {
    let mut store = BeliefStore::from_priors(small_field()).unwrap();
    let projector = Projector::default();
    let before = projector.project(store.iter());

    let mut engine = UpdateEngine::new();
    engine
        .apply(&mut store, &finishing_order(&["z", "y", "x"]), 1.0, "Race")
        .unwrap();

    assert_ne!(projector.project(store.iter()), before);
    assert_eq!(projector.project_priors(&store), before);
}

#[test]
fn race_win_moves_entity_up_the_table() {
    let mut store = BeliefStore::from_priors(small_field()).unwrap();
    let mut engine = UpdateEngine::new();
    for _ in 0..5 {
        engine
            .apply(&mut store, &finishing_order(&["z", "y", "x"]), 1.0, "Race")
            .unwrap();
    }

    let rows = Projector::from_config(&PitwallConfig::default()).project(store.iter());
    assert_eq!(rows[0].entity_id, "z");
    assert_eq!(rows[0].n_observations, 5);
}

#[test]
fn confidence_level_sets_interval_width() {
    let store = BeliefStore::from_priors(priors(&[("m", 10.0, 2.0)])).unwrap();
    let row = &Projector::with_confidence(20, 0.95).unwrap().project(store.iter())[0];
    assert!((row.ci_upper - row.ci_lower - 2.0 * 1.959964 * 2.0).abs() < 1e-4);

    assert!(Projector::with_confidence(20, 1.5).is_err());
}

#[test]
fn confidence_projector_rejects_zero_scale() {
    assert!(matches!(
        Projector::with_confidence(0, 0.95),
        Err(ConfigError::InvalidValue { .. })
    ));
}
