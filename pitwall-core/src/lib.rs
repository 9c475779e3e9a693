//! # pitwall-core
//!
//! Foundation crate for the Pitwall rating engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PitwallConfig;
pub use errors::{ConfigError, PitwallError, PitwallResult};
pub use models::{
    ApplyOutcome, Belief, EntityPrior, ExperienceClass, Gaussian, Prediction, SessionKind, Tier,
    UpdateRecord,
};
