//! Stable machine-readable error codes for calling layers.

/// Every error enum implements this to expose a structured code string.
pub trait PitwallErrorCode {
    /// Returns the code string (e.g., "INVALID_WEIGHT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub mod codes {
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
    pub const INVALID_WEIGHT: &str = "INVALID_WEIGHT";
    pub const UNKNOWN_ENTITY: &str = "UNKNOWN_ENTITY";
    pub const RANK_OUT_OF_RANGE: &str = "RANK_OUT_OF_RANGE";
    pub const LOCK_POISONED: &str = "LOCK_POISONED";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}
