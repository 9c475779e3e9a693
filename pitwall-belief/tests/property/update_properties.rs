use pitwall_belief::{BeliefStore, Projector, UpdateEngine};
use pitwall_core::models::EntityPrior;
use proptest::prelude::*;

fn field(specs: &[(f64, f64)]) -> BeliefStore {
    let priors: Vec<EntityPrior> = specs
        .iter()
        .enumerate()
        .map(|(i, &(mu, sigma))| EntityPrior::new(format!("e{i}"), format!("E{i}"), "Team", mu, sigma))
        .collect();
    BeliefStore::from_priors(priors).unwrap()
}

fn prior_specs() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((1.0f64..20.0, 0.5f64..10.0), 1..12)
}

proptest! {
    #[test]
    fn sigma_never_grows(
        specs in prior_specs(),
        rank in 0u32..30,
        weight in 0.05f64..1.0,
    ) {
        let mut store = field(&specs);
        let before = store.all();
        let mut engine = UpdateEngine::new();
        let batch: Vec<(String, u32)> = store.ids().map(|id| (id.to_string(), rank)).collect();
        engine.apply(&mut store, batch, weight, "S").unwrap();

        for belief in store.iter() {
            let prior = before.get(belief.id()).unwrap();
            prop_assert!(belief.sigma() < prior.sigma());
            prop_assert!(belief.sigma() > 0.0);
        }
    }

    #[test]
    fn batch_order_does_not_matter(
        specs in prior_specs(),
        seed_ranks in prop::collection::vec(1u32..=20, 12),
        weight in 0.05f64..1.0,
    ) {
        let mut forward = field(&specs);
        let mut backward = field(&specs);
        let batch: Vec<(String, u32)> = forward
            .ids()
            .zip(seed_ranks.iter().copied())
            .map(|(id, rank)| (id.to_string(), rank))
            .collect();
        let reversed: Vec<(String, u32)> = batch.iter().rev().cloned().collect();

        let mut engine_a = UpdateEngine::new();
        let mut engine_b = UpdateEngine::new();
        engine_a.apply(&mut forward, batch, weight, "S").unwrap();
        engine_b.apply(&mut backward, reversed, weight, "S").unwrap();

        prop_assert_eq!(forward.all(), backward.all());
        let ids_a: Vec<&str> = engine_a.history().records().iter().map(|r| r.entity_id.as_str()).collect();
        let ids_b: Vec<&str> = engine_b.history().records().iter().map(|r| r.entity_id.as_str()).collect();
        prop_assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn posterior_mu_lies_between_prior_and_evidence(
        mu in 1.0f64..20.0,
        sigma in 0.5f64..10.0,
        rank in 1u32..=20,
    ) {
        let mut store = field(&[(mu, sigma)]);
        let mut engine = UpdateEngine::new();
        engine.apply(&mut store, [("e0", rank)], 1.0, "S").unwrap();

        let observed = 21.0 - f64::from(rank);
        let posterior = store.get("e0").unwrap().mu();
        let (lo, hi) = if mu <= observed { (mu, observed) } else { (observed, mu) };
        prop_assert!(posterior >= lo - 1e-9 && posterior <= hi + 1e-9);
    }

    #[test]
    fn projection_is_idempotent_and_sorted(specs in prior_specs()) {
        let store = field(&specs);
        let projector = Projector::default();
        let first = projector.project(store.iter());
        let second = projector.project(store.iter());

        prop_assert_eq!(&first, &second);
        prop_assert!(first.windows(2).all(|w| w[0].predicted_rank_value <= w[1].predicted_rank_value));
        for row in &first {
            prop_assert!(row.ci_lower >= 1.0 && row.ci_upper <= 20.0);
        }
    }
}
