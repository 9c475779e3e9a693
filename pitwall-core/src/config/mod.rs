pub mod blend_config;
pub mod defaults;
pub mod observability_config;
pub mod projection_config;
pub mod rating_config;
pub mod session_config;

use serde::{Deserialize, Serialize};

pub use blend_config::BlendConfig;
pub use observability_config::ObservabilityConfig;
pub use projection_config::ProjectionConfig;
pub use rating_config::{OutOfRangePolicy, RatingConfig};
pub use session_config::SessionConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PitwallConfig {
    pub rating: RatingConfig,
    pub sessions: SessionConfig,
    pub projection: ProjectionConfig,
    pub blend: BlendConfig,
    pub observability: ObservabilityConfig,
}

impl PitwallConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Parse and validate in one step.
    pub fn load(toml_str: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section. Stops at the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rating.validate()?;
        self.sessions.validate()?;
        self.projection.validate()?;
        self.blend.validate()?;
        Ok(())
    }
}
