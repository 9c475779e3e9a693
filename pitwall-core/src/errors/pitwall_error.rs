use super::error_code::{codes, PitwallErrorCode};
use super::ConfigError;

/// Top-level error type for the Pitwall rating engine.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum PitwallError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("trust weight must be positive and finite, got {weight}")]
    InvalidWeight { weight: f64 },

    #[error("unknown entity: {id}")]
    UnknownEntity { id: String },

    #[error("rank {rank} for {entity_id} is outside 1..={scale}")]
    RankOutOfRange {
        entity_id: String,
        rank: u32,
        scale: u32,
    },

    #[error("lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PitwallErrorCode for PitwallError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(inner) => inner.error_code(),
            Self::InvalidWeight { .. } => codes::INVALID_WEIGHT,
            Self::UnknownEntity { .. } => codes::UNKNOWN_ENTITY,
            Self::RankOutOfRange { .. } => codes::RANK_OUT_OF_RANGE,
            Self::LockPoisoned(_) => codes::LOCK_POISONED,
            Self::SerializationError(_) => codes::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience type alias.
pub type PitwallResult<T> = Result<T, PitwallError>;
