use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Gaussian;
use crate::errors::ConfigError;

/// Competitive tier of the entity's group. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Top,
    Midfield,
    Backmarker,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Midfield => "midfield",
            Self::Backmarker => "backmarker",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "midfield" => Ok(Self::Midfield),
            "backmarker" => Ok(Self::Backmarker),
            other => Err(ConfigError::invalid("tier", format!("unknown tier '{other}'"))),
        }
    }
}

/// Experience class of the entity itself. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceClass {
    Elite,
    Experienced,
    Rookie,
}

impl ExperienceClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Elite => "elite",
            Self::Experienced => "experienced",
            Self::Rookie => "rookie",
        }
    }
}

impl fmt::Display for ExperienceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExperienceClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elite" => Ok(Self::Elite),
            "experienced" => Ok(Self::Experienced),
            "rookie" => Ok(Self::Rookie),
            other => Err(ConfigError::invalid(
                "experience_class",
                format!("unknown experience class '{other}'"),
            )),
        }
    }
}

/// Immutable seed belief for one tracked entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPrior {
    /// Stable identifier, unique across the prior set.
    pub id: String,
    /// Short display label (e.g. a three-letter code).
    pub display_code: String,
    /// Free-form grouping label (e.g. team).
    pub group: String,
    pub tier: Tier,
    pub experience_class: ExperienceClass,
    /// Expected latent rating; higher is better.
    pub mu: f64,
    /// Uncertainty of the belief. Must be strictly positive.
    pub sigma: f64,
}

impl EntityPrior {
    /// Create a midfield/experienced prior. Use the `with_*` methods to reclassify.
    pub fn new(
        id: impl Into<String>,
        display_code: impl Into<String>,
        group: impl Into<String>,
        mu: f64,
        sigma: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_code: display_code.into(),
            group: group.into(),
            tier: Tier::Midfield,
            experience_class: ExperienceClass::Experienced,
            mu,
            sigma,
        }
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_experience(mut self, experience_class: ExperienceClass) -> Self {
        self.experience_class = experience_class;
        self
    }

    /// The prior as a Gaussian.
    pub fn rating(&self) -> Gaussian {
        Gaussian::new(self.mu, self.sigma)
    }

    /// Reject priors that would break fusion: `sigma` must be > 0 with a
    /// finite, non-zero square, and `mu` must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let variance = self.sigma * self.sigma;
        if !(self.sigma > 0.0 && variance.is_finite() && variance > 0.0) {
            return Err(ConfigError::InvalidSigma {
                entity_id: self.id.clone(),
                sigma: self.sigma,
            });
        }
        if !self.mu.is_finite() {
            return Err(ConfigError::invalid(
                format!("{}.mu", self.id),
                format!("mu must be finite, got {}", self.mu),
            ));
        }
        Ok(())
    }
}
