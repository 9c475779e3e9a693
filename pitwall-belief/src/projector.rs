use pitwall_core::config::{PitwallConfig, ProjectionConfig};
use pitwall_core::constants::RATING_SCALE;
use pitwall_core::errors::ConfigError;
use pitwall_core::models::{Belief, Prediction};
use pitwall_observability::projection_span;

use crate::formula;
use crate::store::BeliefStore;

/// Read-side transform from beliefs to a ranked prediction table.
///
/// Uses the inverse of the engine's rank→rating map, so an untouched belief
/// projects to exactly `(K + 1) - prior.mu`.
#[derive(Debug, Clone)]
pub struct Projector {
    scale: u32,
    config: ProjectionConfig,
}

impl Projector {
    pub fn new(scale: u32, config: ProjectionConfig) -> Self {
        Self { scale, config }
    }

    /// Projector whose interval covers `level` of the belief (e.g. 0.9).
    pub fn with_confidence(scale: u32, level: f64) -> Result<Self, ConfigError> {
        if scale == 0 {
            return Err(ConfigError::invalid("rating.scale", "scale must be at least 1"));
        }
        let ci_z = formula::z_for_confidence(level).ok_or_else(|| {
            ConfigError::invalid("projection.ci_z", format!("confidence level must be in (0, 1), got {level}"))
        })?;
        Ok(Self::new(
            scale,
            ProjectionConfig {
                ci_z,
                ..Default::default()
            },
        ))
    }

    pub fn from_config(config: &PitwallConfig) -> Self {
        Self::new(config.rating.scale, config.projection.clone())
    }

    /// Project beliefs to rows sorted best first.
    ///
    /// The sort is stable: equal `predicted_rank_value`s keep input order.
    pub fn project<'a, I>(&self, beliefs: I) -> Vec<Prediction>
    where
        I: IntoIterator<Item = &'a Belief>,
    {
        let mut rows: Vec<Prediction> = beliefs.into_iter().map(|b| self.project_one(b)).collect();
        let _span = projection_span!(rows.len()).entered();

        rows.sort_by(|a, b| a.predicted_rank_value.total_cmp(&b.predicted_rank_value));
        for (idx, row) in rows.iter_mut().enumerate() {
            row.predicted_rank = idx + 1;
        }
        rows
    }

    /// Projection of every entity's prior, ignoring all updates so far.
    pub fn project_priors(&self, store: &BeliefStore) -> Vec<Prediction> {
        let priors: Vec<Belief> = store
            .iter()
            .map(|b| Belief::from_prior(b.prior.clone()))
            .collect();
        self.project(&priors)
    }

    fn project_one(&self, belief: &Belief) -> Prediction {
        let value = formula::rating_to_rank(belief.mu(), self.scale);
        let half_width = self.config.ci_z * belief.sigma();
        let (mut lower, mut upper) = (value - half_width, value + half_width);
        if self.config.clamp_interval {
            let max = f64::from(self.scale.max(1));
            lower = lower.clamp(1.0, max);
            upper = upper.clamp(1.0, max);
        }

        Prediction {
            entity_id: belief.prior.id.clone(),
            display_code: belief.prior.display_code.clone(),
            group: belief.prior.group.clone(),
            rating: belief.rating,
            predicted_rank_value: value,
            ci_lower: lower,
            ci_upper: upper,
            predicted_rank: 0,
            n_observations: belief.n_observations,
        }
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(RATING_SCALE, ProjectionConfig::default())
    }
}
