use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::SessionKind;

/// Per-session trust weight overrides. Key is the session kind name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub weights: HashMap<String, f64>,
}

impl SessionConfig {
    /// Override if configured, otherwise the kind's built-in weight.
    pub fn weight_for(&self, kind: SessionKind) -> f64 {
        self.weights
            .get(kind.name())
            .copied()
            .unwrap_or_else(|| kind.default_trust_weight())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, &weight) in &self.weights {
            let field = format!("sessions.weights.{name}");
            if !SessionKind::ALL.iter().any(|kind| kind.name() == name) {
                return Err(ConfigError::invalid(field, "unknown session kind"));
            }
            if !(weight.is_finite() && weight > 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("trust weight must be positive and finite, got {weight}"),
                ));
            }
        }
        Ok(())
    }
}
