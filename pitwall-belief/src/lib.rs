//! # pitwall-belief
//!
//! Sequential Bayesian rating engine: one Gaussian belief per entity,
//! fused with rank evidence from each session and projected back to ranks.
//!
//! Layering: [`store`] is the leaf; [`engine`] and [`projector`] read or
//! mutate it; [`tracker`] bundles all three behind one handle.

pub mod audit;
pub mod engine;
pub mod formula;
pub mod priors;
pub mod projector;
pub mod store;
pub mod tracker;

pub use audit::AuditLog;
pub use engine::UpdateEngine;
pub use priors::PriorSet;
pub use projector::Projector;
pub use store::{BeliefSnapshot, BeliefStore};
pub use tracker::{RatingTracker, SharedTracker};
