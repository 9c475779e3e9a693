use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Type of observation session. Each kind carries a default trust weight:
/// the lower the weight, the less a result can move a belief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Pre-season testing. Low signal.
    Testing,
    Practice,
    Qualifying,
    SprintQualifying,
    Sprint,
    /// Full trust.
    Race,
}

impl SessionKind {
    pub const ALL: [SessionKind; 6] = [
        Self::Testing,
        Self::Practice,
        Self::Qualifying,
        Self::SprintQualifying,
        Self::Sprint,
        Self::Race,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Testing => "testing",
            Self::Practice => "practice",
            Self::Qualifying => "qualifying",
            Self::SprintQualifying => "sprint_qualifying",
            Self::Sprint => "sprint",
            Self::Race => "race",
        }
    }

    /// Built-in trust weight, used when config has no override.
    pub fn default_trust_weight(&self) -> f64 {
        match self {
            Self::Testing => 0.1,
            Self::Practice => 0.3,
            Self::Qualifying | Self::SprintQualifying => 0.8,
            Self::Sprint => 0.9,
            Self::Race => 1.0,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SessionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ConfigError::invalid("session", format!("unknown session kind '{s}'")))
    }
}
