//! Named prior sets.
//!
//! Each set is built fresh on request and handed to the store by the caller;
//! nothing here is process-wide state.

use serde::Deserialize;

use pitwall_core::errors::ConfigError;
use pitwall_core::models::{EntityPrior, ExperienceClass, Tier};

use crate::store::BeliefStore;

/// A named, ordered list of entity priors.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorSet {
    name: String,
    priors: Vec<EntityPrior>,
}

/// On-disk shape: a list of `[[entity]]` tables.
#[derive(Debug, Deserialize)]
struct PriorFile {
    #[serde(default)]
    entity: Vec<EntityPrior>,
}

impl PriorSet {
    /// 2025 standings carried into the 2026 regulation change, with wide sigmas.
    pub const SEASON_2026: &'static str = "2026-style";
    /// Final 2023 championship standings, as priors for 2024.
    pub const STANDINGS_2023: &'static str = "2023-standings";

    pub fn new(name: impl Into<String>, priors: Vec<EntityPrior>) -> Self {
        Self {
            name: name.into(),
            priors,
        }
    }

    /// Names accepted by [`by_name`](Self::by_name).
    pub fn builtin_names() -> [&'static str; 2] {
        [Self::SEASON_2026, Self::STANDINGS_2023]
    }

    pub fn by_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            Self::SEASON_2026 => Ok(Self::season_2026()),
            Self::STANDINGS_2023 => Ok(Self::standings_2023()),
            other => Err(ConfigError::UnknownPriorSet {
                name: other.to_string(),
            }),
        }
    }

    /// Parse `[[entity]]` tables. Priors are validated when the store is built.
    pub fn from_toml(name: impl Into<String>, toml_str: &str) -> Result<Self, ConfigError> {
        let file: PriorFile = toml::from_str(toml_str)?;
        Ok(Self::new(name, file.entity))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priors(&self) -> &[EntityPrior] {
        &self.priors
    }

    pub fn len(&self) -> usize {
        self.priors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priors.is_empty()
    }

    /// Validate and load into a fresh store.
    pub fn into_store(self) -> Result<BeliefStore, ConfigError> {
        BeliefStore::from_priors(self.priors)
    }

    pub fn season_2026() -> Self {
        use ExperienceClass::*;
        use Tier::*;
        let priors = vec![
            // Top four of 2025
            prior("4", "NOR", "McLaren", Top, Elite, 18.0, 4.0),
            prior("1", "VER", "Red Bull Racing", Top, Elite, 18.0, 4.0),
            prior("81", "PIA", "McLaren", Top, Elite, 17.0, 4.0),
            prior("63", "RUS", "Mercedes", Top, Elite, 17.0, 4.0),
            // Upper midfield
            prior("16", "LEC", "Ferrari", Midfield, Elite, 14.0, 5.0),
            prior("44", "HAM", "Ferrari", Midfield, Elite, 13.0, 5.0),
            prior("12", "ANT", "Mercedes", Midfield, Rookie, 13.0, 5.0),
            // Midfield
            prior("23", "ALB", "Williams", Midfield, Experienced, 11.0, 5.0),
            prior("55", "SAI", "Williams", Midfield, Experienced, 11.0, 5.0),
            prior("14", "ALO", "Aston Martin", Midfield, Elite, 11.0, 5.0),
            prior("27", "HUL", "Kick Sauber", Midfield, Experienced, 10.0, 6.0),
            prior("6", "HAD", "Racing Bulls", Midfield, Rookie, 10.0, 6.0),
            // Lower midfield
            prior("87", "BEA", "Haas F1 Team", Backmarker, Rookie, 9.0, 6.0),
            prior("30", "LAW", "Racing Bulls", Backmarker, Experienced, 9.0, 6.0),
            prior("31", "OCO", "Haas F1 Team", Backmarker, Experienced, 9.0, 6.0),
            prior("18", "STR", "Aston Martin", Backmarker, Experienced, 8.0, 6.0),
            prior("22", "TSU", "Red Bull Racing", Backmarker, Experienced, 8.0, 6.0),
            // Backmarkers
            prior("10", "GAS", "Alpine", Backmarker, Experienced, 7.0, 6.0),
            prior("5", "BOR", "Kick Sauber", Backmarker, Rookie, 6.0, 7.0),
            prior("7", "COL", "Alpine", Backmarker, Rookie, 5.0, 7.0),
        ];
        Self::new(Self::SEASON_2026, priors)
    }

    pub fn standings_2023() -> Self {
        use ExperienceClass::*;
        use Tier::*;
        let priors = vec![
            prior("1", "VER", "Red Bull Racing", Top, Elite, 20.0, 3.0),
            prior("11", "PER", "Red Bull Racing", Top, Experienced, 16.0, 4.0),
            prior("44", "HAM", "Mercedes", Midfield, Elite, 15.0, 4.0),
            prior("14", "ALO", "Aston Martin", Midfield, Elite, 15.0, 4.0),
            prior("55", "SAI", "Ferrari", Midfield, Experienced, 15.0, 4.0),
            prior("63", "RUS", "Mercedes", Midfield, Experienced, 14.0, 4.0),
            prior("16", "LEC", "Ferrari", Midfield, Elite, 15.0, 4.0),
            prior("4", "NOR", "McLaren", Midfield, Experienced, 15.0, 4.0),
            prior("81", "PIA", "McLaren", Midfield, Rookie, 12.0, 5.0),
            prior("10", "GAS", "Alpine", Backmarker, Experienced, 10.0, 5.0),
            prior("23", "ALB", "Williams", Backmarker, Experienced, 10.0, 5.0),
            prior("18", "STR", "Aston Martin", Backmarker, Experienced, 9.0, 5.0),
            prior("31", "OCO", "Alpine", Backmarker, Experienced, 9.0, 5.0),
            prior("20", "MAG", "Haas", Backmarker, Experienced, 8.0, 6.0),
            prior("27", "HUL", "Haas", Backmarker, Experienced, 8.0, 6.0),
            prior("22", "TSU", "AlphaTauri", Backmarker, Experienced, 8.0, 6.0),
            prior("24", "ZHO", "Alfa Romeo", Backmarker, Experienced, 7.0, 6.0),
            prior("77", "BOT", "Alfa Romeo", Backmarker, Experienced, 8.0, 6.0),
            prior("3", "RIC", "AlphaTauri", Backmarker, Experienced, 9.0, 5.0),
            prior("2", "SAR", "Williams", Backmarker, Rookie, 6.0, 7.0),
        ];
        Self::new(Self::STANDINGS_2023, priors)
    }
}

fn prior(
    id: &str,
    code: &str,
    group: &str,
    tier: Tier,
    experience: ExperienceClass,
    mu: f64,
    sigma: f64,
) -> EntityPrior {
    EntityPrior::new(id, code, group, mu, sigma)
        .with_tier(tier)
        .with_experience(experience)
}
