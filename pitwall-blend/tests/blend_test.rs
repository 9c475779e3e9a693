use std::collections::HashMap;

use pitwall_blend::strategies::STRATEGY_NAMES;
use pitwall_blend::{
    combiner_for, prior_means, remove_outliers_mad, BlendRanker, PriorOnlyBlend,
    WeightedSumBlend, ZScoreBlend,
};
use pitwall_core::config::{BlendConfig, PitwallConfig};
use pitwall_core::errors::ConfigError;
use pitwall_core::models::{ScoredEntity, Segment, SegmentScores, TrackWeights};
use test_fixtures::{load_scores, priors};

fn fixture_priors() -> HashMap<String, f64> {
    prior_means(&priors(&[
        ("4", 19.0, 4.0),
        ("1", 18.0, 4.0),
        ("63", 17.0, 4.0),
        ("16", 16.0, 4.0),
        ("23", 9.0, 4.0),
        ("10", 7.0, 4.0),
        ("7", 4.0, 4.0),
    ]))
}

fn ids(rows: &[pitwall_blend::BlendedPrediction]) -> Vec<&str> {
    rows.iter().map(|r| r.entity_id.as_str()).collect()
}

#[test]
fn prior_only_orders_by_prior_mean() {
    let ranker = BlendRanker::new(Box::new(PriorOnlyBlend));
    let rows = ranker.rank(&load_scores("testing_scores"), &fixture_priors(), &TrackWeights::default());

    assert_eq!(ids(&rows), ["4", "1", "63", "16", "99", "23", "10", "7"]);
    let positions: Vec<usize> = rows.iter().map(|r| r.predicted_position).collect();
    assert_eq!(positions, (1..=8).collect::<Vec<_>>());
}

#[test]
fn missing_prior_uses_configured_fallback() {
    let config = BlendConfig {
        fallback_prior_mu: 1.0,
        ..Default::default()
    };
    let ranker = BlendRanker::from_config(Box::new(PriorOnlyBlend), &config);
    let rows = ranker.rank(&load_scores("testing_scores"), &fixture_priors(), &TrackWeights::default());

    let last = rows.last().unwrap();
    assert_eq!(last.entity_id, "99");
    assert!(last.used_fallback);
    assert_eq!(last.prior_mu, 1.0);
    assert_eq!(rows.iter().filter(|r| r.used_fallback).count(), 1);
}

#[test]
fn weighted_sum_matches_hand_computation() {
    let ranker = BlendRanker::new(Box::new(WeightedSumBlend::default()));
    let rows = ranker.rank(&load_scores("testing_scores"), &fixture_priors(), &TrackWeights::default());

    let ten = rows.iter().find(|r| r.entity_id == "10").unwrap();
    // straight missing -> 0
    let signal = 0.2 * 0.35 + 0.4 * 0.41 + 0.2 * 0.3;
    assert!((ten.signal - signal).abs() < 1e-12);
    assert!((ten.rating - (0.9 * 7.0 + 0.1 * signal)).abs() < 1e-12);
}

#[test]
fn zscore_keeps_strong_prior_order_and_penalizes_slow_cars() {
    let ranker = BlendRanker::new(Box::new(ZScoreBlend::default()));
    let rows = ranker.rank(&load_scores("testing_scores"), &fixture_priors(), &TrackWeights::default());

    assert_eq!(rows[0].entity_id, "4");
    for pair in rows.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

#[test]
fn zscore_breaks_prior_tie_with_faster_segments() {
    let field = vec![
        ScoredEntity::new(
            "slow",
            SegmentScores {
                medium_corner: Some(0.5),
                ..Default::default()
            },
        ),
        ScoredEntity::new(
            "fast",
            SegmentScores {
                medium_corner: Some(-0.5),
                ..Default::default()
            },
        ),
    ];
    let priors: HashMap<String, f64> =
        [("slow".to_string(), 12.0), ("fast".to_string(), 12.0)].into_iter().collect();

    let rows = BlendRanker::new(Box::new(ZScoreBlend::default())).rank(
        &field,
        &priors,
        &TrackWeights::default(),
    );
    assert_eq!(ids(&rows), ["fast", "slow"]);
}

#[test]
fn equal_ratings_keep_field_order() {
    let field: Vec<ScoredEntity> = ["c", "a", "b"]
        .iter()
        .map(|id| ScoredEntity::new(*id, SegmentScores::default()))
        .collect();
    let rows = BlendRanker::new(Box::new(PriorOnlyBlend)).rank(
        &field,
        &HashMap::new(),
        &TrackWeights::default(),
    );
    assert_eq!(ids(&rows), ["c", "a", "b"]);
}

#[test]
fn combiner_for_resolves_every_name() {
    let config = PitwallConfig::default().blend;
    for name in STRATEGY_NAMES {
        assert_eq!(combiner_for(name, &config).unwrap().name(), name);
    }
    assert!(matches!(
        combiner_for("magic", &config),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn configured_ranker_follows_strategy_setting() {
    assert_eq!(BlendRanker::configured(&BlendConfig::default()).unwrap().strategy(), "zscore");

    let config = PitwallConfig::load("[blend]\nstrategy = \"weighted_sum\"\nprior_weight = 0.5\n").unwrap();
    let ranker = BlendRanker::configured(&config.blend).unwrap();
    assert_eq!(ranker.strategy(), "weighted_sum");

    let field = vec![ScoredEntity::new(
        "a",
        SegmentScores {
            straight: Some(10.0),
            ..Default::default()
        },
    )];
    let rows = ranker.rank(&field, &HashMap::new(), &config.blend.default_track_weights);
    // 0.5 * 10 (fallback) + 0.5 * (0.2 * 10)
    assert!((rows[0].rating - 6.0).abs() < 1e-12);

    let bad = BlendConfig {
        strategy: "magic".to_string(),
        ..Default::default()
    };
    assert!(BlendRanker::configured(&bad).is_err());
}

#[test]
fn rows_serialize_for_reports() {
    let rows = BlendRanker::new(Box::new(PriorOnlyBlend)).rank(
        &load_scores("testing_scores"),
        &fixture_priors(),
        &TrackWeights::default(),
    );
    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[0]["predicted_position"], 1);
    assert_eq!(json[0]["entity_id"], "4");
}

// ── Outlier filter ──────────────────────────────────────────────────────

#[test]
fn mad_filter_drops_extreme_slow_corner_score() {
    let report = remove_outliers_mad(&load_scores("testing_scores"), Segment::SlowCorner, 3.0);

    assert_eq!(report.removed, ["7"]);
    assert_eq!(report.kept.len(), 7);
    let (lower, upper) = report.bounds.unwrap();
    // median -0.01, MAD 0.315
    assert!((lower - (-0.01 - 0.945)).abs() < 1e-9);
    assert!((upper - (-0.01 + 0.945)).abs() < 1e-9);
}

#[test]
fn mad_filter_drops_rows_missing_the_segment() {
    let report = remove_outliers_mad(&load_scores("testing_scores"), Segment::Straight, 3.0);
    assert_eq!(report.removed, ["10"]);
    assert!(report.kept_ids().all(|id| id != "10"));
}

#[test]
fn mad_bounds_are_inclusive() {
    let rows: Vec<ScoredEntity> = [1.0, 2.0, 3.0, 4.0, 5.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            ScoredEntity::new(
                format!("e{i}"),
                SegmentScores {
                    high_corner: Some(v),
                    ..Default::default()
                },
            )
        })
        .collect();
    // median 3, MAD 1 -> bounds [1, 5] with n_mad 2
    let report = remove_outliers_mad(&rows, Segment::HighCorner, 2.0);
    assert!(report.removed.is_empty());
    assert_eq!(report.bounds, Some((1.0, 5.0)));

    let tight = remove_outliers_mad(&rows, Segment::HighCorner, 1.0);
    assert_eq!(tight.removed, ["e0", "e4"]);
}

#[test]
fn mad_filter_on_absent_segment_removes_everything() {
    let rows = vec![ScoredEntity::new("a", SegmentScores::default())];
    let report = remove_outliers_mad(&rows, Segment::Straight, 3.0);
    assert_eq!(report.bounds, None);
    assert_eq!(report.removed, ["a"]);
}
