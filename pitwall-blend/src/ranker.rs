//! Field ranking through a pluggable [`RatingCombiner`].

use std::collections::HashMap;

use pitwall_core::config::BlendConfig;
use pitwall_core::constants::FALLBACK_PRIOR_MU;
use pitwall_core::errors::ConfigError;
use pitwall_core::models::{EntityPrior, ScoredEntity, TrackWeights};
use pitwall_core::traits::RatingCombiner;
use pitwall_observability::blend_span;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::strategies::combiner_for;

/// One ranked row of a blended prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendedPrediction {
    pub entity_id: String,
    pub prior_mu: f64,
    /// Track-weighted signal after the strategy's `prepare` step.
    pub signal: f64,
    pub rating: f64,
    /// 1-based position, best first.
    pub predicted_position: usize,
    /// True when the entity had no prior and the fallback mean was used.
    pub used_fallback: bool,
}

/// Ranks a field with one blend strategy.
pub struct BlendRanker {
    combiner: Box<dyn RatingCombiner>,
    fallback_prior_mu: f64,
}

impl BlendRanker {
    pub fn new(combiner: Box<dyn RatingCombiner>) -> Self {
        Self {
            combiner,
            fallback_prior_mu: FALLBACK_PRIOR_MU,
        }
    }

    pub fn from_config(combiner: Box<dyn RatingCombiner>, config: &BlendConfig) -> Self {
        Self::new(combiner).with_fallback_prior_mu(config.fallback_prior_mu)
    }

    /// Ranker for `config.strategy` with the configured fallback mean.
    pub fn configured(config: &BlendConfig) -> Result<Self, ConfigError> {
        let combiner = combiner_for(&config.strategy, config)?;
        Ok(Self::from_config(combiner, config))
    }

    pub fn with_fallback_prior_mu(mut self, mu: f64) -> Self {
        self.fallback_prior_mu = mu;
        self
    }

    pub fn strategy(&self) -> &'static str {
        self.combiner.name()
    }

    /// Rank `field` best first.
    ///
    /// `priors` maps entity id to prior mean. Rows with equal ratings keep
    /// their order in `field`.
    pub fn rank(
        &self,
        field: &[ScoredEntity],
        priors: &HashMap<String, f64>,
        weights: &TrackWeights,
    ) -> Vec<BlendedPrediction> {
        let _span = blend_span!(self.combiner.name(), field.len()).entered();

        let prepared = self.combiner.prepare(field);
        let mut rows: Vec<BlendedPrediction> = prepared
            .iter()
            .map(|entity| {
                let (prior_mu, used_fallback) = match priors.get(&entity.entity_id) {
                    Some(&mu) => (mu, false),
                    None => (self.fallback_prior_mu, true),
                };
                if used_fallback {
                    debug!(entity = %entity.entity_id, fallback = prior_mu, "no prior, using fallback mean");
                }
                BlendedPrediction {
                    entity_id: entity.entity_id.clone(),
                    prior_mu,
                    signal: weights.signal(&entity.scores),
                    rating: self.combiner.combine(prior_mu, &entity.scores, weights),
                    predicted_position: 0,
                    used_fallback,
                }
            })
            .collect();

        rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        for (idx, row) in rows.iter_mut().enumerate() {
            row.predicted_position = idx + 1;
        }

        info!(
            strategy = self.combiner.name(),
            ranked = rows.len(),
            fallbacks = rows.iter().filter(|r| r.used_fallback).count(),
            "field ranked"
        );
        rows
    }
}

/// `id -> mu` lookup for [`BlendRanker::rank`].
pub fn prior_means<'a, I>(priors: I) -> HashMap<String, f64>
where
    I: IntoIterator<Item = &'a EntityPrior>,
{
    priors.into_iter().map(|p| (p.id.clone(), p.mu)).collect()
}
