//! UpdateEngine: converts one session's ranks into evidence and fuses it
//! into the belief store.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use chrono::Utc;
use pitwall_core::config::{OutOfRangePolicy, PitwallConfig, RatingConfig, SessionConfig};
use pitwall_core::errors::{ConfigError, PitwallError, PitwallResult};
use pitwall_core::models::{ApplyOutcome, Gaussian, SessionKind, UpdateRecord};
use pitwall_core::traits::{NoOpObserver, UpdateObserver};
use pitwall_observability::session_update_span;
use tracing::{debug, info, warn};

use crate::audit::AuditLog;
use crate::formula;
use crate::store::BeliefStore;

/// Sequential Bayesian update engine.
///
/// Each entity is fused independently from its own prior and its own
/// observation, so the result of a batch does not depend on iteration order.
pub struct UpdateEngine {
    rating: RatingConfig,
    sessions: SessionConfig,
    audit: AuditLog,
    observer: Box<dyn UpdateObserver>,
}

impl UpdateEngine {
    /// Create an engine with default rating and session config.
    pub fn new() -> Self {
        Self::build(RatingConfig::default(), SessionConfig::default())
    }

    /// Validate both sections, then build the engine.
    pub fn with_config(rating: RatingConfig, sessions: SessionConfig) -> Result<Self, ConfigError> {
        rating.validate()?;
        sessions.validate()?;
        Ok(Self::build(rating, sessions))
    }

    pub fn from_config(config: &PitwallConfig) -> Result<Self, ConfigError> {
        Self::with_config(config.rating.clone(), config.sessions.clone())
    }

    fn build(rating: RatingConfig, sessions: SessionConfig) -> Self {
        Self {
            rating,
            sessions,
            audit: AuditLog::new(),
            observer: Box::new(NoOpObserver),
        }
    }

    /// Attach an observer notified on every fused or skipped entity.
    pub fn with_observer(mut self, observer: Box<dyn UpdateObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn rating_config(&self) -> &RatingConfig {
        &self.rating
    }

    /// Trust weight configured for a session kind.
    pub fn trust_weight_for(&self, kind: SessionKind) -> f64 {
        self.sessions.weight_for(kind)
    }

    /// Full audit trail.
    pub fn history(&self) -> &AuditLog {
        &self.audit
    }

    /// Audit records for one entity, in call order.
    pub fn records_for<'a>(&'a self, entity_id: &'a str) -> impl Iterator<Item = &'a UpdateRecord> {
        self.audit.for_entity(entity_id)
    }

    /// Audit trail as a pretty-printed JSON array.
    pub fn history_json(&self) -> PitwallResult<String> {
        self.audit.to_json()
    }

    /// Fuse one session's observed ranks into `store`.
    ///
    /// Ids not present in the store are skipped, not rejected. Validation
    /// (trust weight, and ranks under [`OutOfRangePolicy::Reject`]) runs
    /// before any belief is touched, so a failed call leaves the store and
    /// the audit trail unchanged. Entities are processed in id order; if an
    /// id appears more than once, its last rank wins.
    pub fn apply<I, K, R>(
        &mut self,
        store: &mut BeliefStore,
        observations: I,
        trust_weight: f64,
        session: &str,
    ) -> PitwallResult<ApplyOutcome>
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: Borrow<u32>,
    {
        if !(trust_weight.is_finite() && trust_weight > 0.0) {
            return Err(PitwallError::InvalidWeight {
                weight: trust_weight,
            });
        }
        let evidence_sigma = formula::evidence_sigma(self.rating.base_evidence_sigma, trust_weight);
        if !formula::usable_sigma(evidence_sigma) {
            return Err(PitwallError::InvalidWeight {
                weight: trust_weight,
            });
        }

        let batch: BTreeMap<String, u32> = observations
            .into_iter()
            .map(|(id, rank)| (id.as_ref().to_string(), *rank.borrow()))
            .collect();

        let _span = session_update_span!(session, batch.len()).entered();

        let scale = self.rating.scale;
        let policy = self.rating.out_of_range;
        if policy == OutOfRangePolicy::Reject {
            if let Some((id, &rank)) = batch
                .iter()
                .find(|&(id, &rank)| store.contains(id) && !formula::rank_in_range(rank, scale))
            {
                return Err(PitwallError::RankOutOfRange {
                    entity_id: id.clone(),
                    rank,
                    scale,
                });
            }
        }

        let mut outcome = ApplyOutcome {
            session: session.to_string(),
            trust_weight,
            ..Default::default()
        };

        for (id, rank) in batch {
            let (prior, display_code) = match store.get(&id) {
                Ok(belief) => (belief.rating, belief.prior.display_code.clone()),
                Err(_) => {
                    debug!(entity = %id, rank, "untracked entity skipped");
                    self.observer.on_entity_skipped(session, &id);
                    outcome.skipped.push(id);
                    continue;
                }
            };

            if !formula::rank_in_range(rank, scale) {
                warn!(entity = %id, rank, scale, ?policy, "observed rank outside rating scale");
            }
            // Reject was handled above, so every rank resolves here.
            let effective_rank = formula::resolve_rank(rank, scale, policy).unwrap_or(rank);

            let observed_rating = formula::rank_to_rating(f64::from(effective_rank), scale);
            let evidence = Gaussian::new(observed_rating, evidence_sigma);
            let posterior = formula::fuse(prior, evidence);
            store.record_observation(&id, posterior);

            debug!(
                entity = %id,
                rank,
                prior_mu = prior.mu,
                prior_sigma = prior.sigma,
                posterior_mu = posterior.mu,
                posterior_sigma = posterior.sigma,
                "belief fused"
            );

            let record = UpdateRecord {
                sequence: self.audit.next_sequence(),
                session: session.to_string(),
                entity_id: id.clone(),
                display_code,
                observed_rank: rank,
                observed_rating,
                evidence_sigma,
                prior,
                posterior,
                trust_weight,
                recorded_at: Utc::now(),
            };
            self.observer.on_belief_updated(&record);
            self.audit.append(record);
            outcome.updated.push(id);
        }

        info!(
            updated = outcome.updated.len(),
            skipped = outcome.skipped.len(),
            trust_weight,
            "session applied"
        );
        self.observer.on_session_applied(&outcome);
        Ok(outcome)
    }

    /// [`apply`](Self::apply) with the trust weight configured for `kind`.
    pub fn apply_session<I, K, R>(
        &mut self,
        store: &mut BeliefStore,
        kind: SessionKind,
        session: &str,
        observations: I,
    ) -> PitwallResult<ApplyOutcome>
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: Borrow<u32>,
    {
        let trust_weight = self.trust_weight_for(kind);
        self.apply(store, observations, trust_weight, session)
    }
}

impl Default for UpdateEngine {
    fn default() -> Self {
        Self::new()
    }
}
