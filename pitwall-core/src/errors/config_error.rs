//! Configuration errors: malformed priors and invalid config values.

use super::error_code::{codes, PitwallErrorCode};

/// Errors raised while building priors or loading configuration.
///
/// Any of these prevents a belief store from being constructed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("prior for {entity_id} has non-positive sigma: {sigma}")]
    InvalidSigma { entity_id: String, sigma: f64 },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("config parse error: {message}")]
    ParseError { message: String },

    #[error("unknown prior set: {name}")]
    UnknownPriorSet { name: String },

    #[error("duplicate entity in priors: {entity_id}")]
    DuplicateEntity { entity_id: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::ParseError {
            message: err.to_string(),
        }
    }
}

impl PitwallErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => codes::CONFIG_PARSE_ERROR,
            _ => codes::CONFIG_ERROR,
        }
    }
}
