use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use pitwall_core::errors::{ConfigError, PitwallError, PitwallResult};
use pitwall_core::models::{Belief, EntityPrior, Gaussian};

/// One Gaussian belief per tracked entity, in prior insertion order.
///
/// Entities are never removed; an entity missing from a batch keeps its belief.
#[derive(Debug, Clone, Default)]
pub struct BeliefStore {
    beliefs: IndexMap<String, Belief>,
}

impl BeliefStore {
    /// Build a store from an `id -> prior` mapping.
    ///
    /// Every prior is validated before anything is stored: a non-positive
    /// sigma, a key that disagrees with the prior's own id, or a repeated id
    /// prevents construction.
    pub fn initialize<I, K>(priors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, EntityPrior)>,
        K: AsRef<str>,
    {
        let mut beliefs = IndexMap::new();
        for (key, prior) in priors {
            let key = key.as_ref();
            if key != prior.id {
                return Err(ConfigError::invalid(
                    format!("priors.{key}"),
                    format!("keyed as '{key}' but prior id is '{}'", prior.id),
                ));
            }
            prior.validate()?;
            if beliefs.contains_key(key) {
                return Err(ConfigError::DuplicateEntity {
                    entity_id: key.to_string(),
                });
            }
            beliefs.insert(key.to_string(), Belief::from_prior(prior));
        }
        Ok(Self { beliefs })
    }

    /// Build a store from a list of priors keyed by their own ids.
    pub fn from_priors(priors: Vec<EntityPrior>) -> Result<Self, ConfigError> {
        Self::initialize(priors.into_iter().map(|p| (p.id.clone(), p)))
    }

    /// Current belief for `id`.
    pub fn get(&self, id: &str) -> PitwallResult<&Belief> {
        self.beliefs
            .get(id)
            .ok_or_else(|| PitwallError::UnknownEntity { id: id.to_string() })
    }

    /// Owned copy of every belief. Later updates do not show through it.
    pub fn all(&self) -> BeliefSnapshot {
        BeliefSnapshot {
            beliefs: self.beliefs.clone(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.beliefs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.beliefs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Belief> {
        self.beliefs.values()
    }

    /// Restore every belief to its prior and zero its counter.
    pub fn reset(&mut self) {
        for belief in self.beliefs.values_mut() {
            *belief = Belief::from_prior(belief.prior.clone());
        }
    }

    /// Replace the rating of a tracked entity and count the observation.
    pub(crate) fn record_observation(&mut self, id: &str, posterior: Gaussian) -> Option<&Belief> {
        let belief = self.beliefs.get_mut(id)?;
        belief.rating = posterior;
        belief.n_observations += 1;
        Some(belief)
    }
}

/// Frozen copy of a store's beliefs, in store order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeliefSnapshot {
    beliefs: IndexMap<String, Belief>,
}

impl BeliefSnapshot {
    pub fn get(&self, id: &str) -> Option<&Belief> {
        self.beliefs.get(id)
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Belief> {
        self.beliefs.values()
    }

    /// `id -> (mu, sigma, n_observations)`, the outbound belief shape.
    pub fn summary(&self) -> IndexMap<String, (f64, f64, u32)> {
        self.beliefs
            .iter()
            .map(|(id, b)| (id.clone(), (b.mu(), b.sigma(), b.n_observations)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a BeliefSnapshot {
    type Item = &'a Belief;
    type IntoIter = indexmap::map::Values<'a, String, Belief>;

    fn into_iter(self) -> Self::IntoIter {
        self.beliefs.values()
    }
}
