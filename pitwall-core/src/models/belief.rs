use serde::{Deserialize, Serialize};

use super::{EntityPrior, Gaussian};

/// Current belief about one entity, seeded from its prior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Belief {
    /// The seed this belief started from. Carries the descriptive labels.
    pub prior: EntityPrior,
    /// Current `(mu, sigma)`.
    pub rating: Gaussian,
    /// Number of update calls that included this entity.
    pub n_observations: u32,
}

impl Belief {
    pub fn from_prior(prior: EntityPrior) -> Self {
        let rating = prior.rating();
        Self {
            prior,
            rating,
            n_observations: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.prior.id
    }

    pub fn mu(&self) -> f64 {
        self.rating.mu
    }

    pub fn sigma(&self) -> f64 {
        self.rating.sigma
    }

    /// True while no observation has touched this belief.
    pub fn is_prior(&self) -> bool {
        self.n_observations == 0
    }
}
