//! RatingTracker bundles store, engine, and projector; SharedTracker puts
//! one behind a lock for concurrent hosts.

use std::borrow::Borrow;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pitwall_core::config::PitwallConfig;
use pitwall_core::errors::{ConfigError, PitwallError, PitwallResult};
use pitwall_core::models::{ApplyOutcome, Belief, Prediction, SessionKind, UpdateRecord};
use pitwall_core::traits::UpdateObserver;

use crate::audit::AuditLog;
use crate::engine::UpdateEngine;
use crate::priors::PriorSet;
use crate::projector::Projector;
use crate::store::{BeliefSnapshot, BeliefStore};

/// Single-owner rating tracker.
pub struct RatingTracker {
    store: BeliefStore,
    engine: UpdateEngine,
    projector: Projector,
}

impl RatingTracker {
    /// Tracker with default config.
    pub fn new(store: BeliefStore) -> Self {
        Self {
            store,
            engine: UpdateEngine::new(),
            projector: Projector::default(),
        }
    }

    /// Validate `config` and build a tracker around `store`.
    pub fn with_config(store: BeliefStore, config: &PitwallConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            engine: UpdateEngine::from_config(config)?,
            projector: Projector::from_config(config),
        })
    }

    /// Load `priors` and build a tracker with a validated `config`.
    pub fn from_prior_set(priors: PriorSet, config: &PitwallConfig) -> Result<Self, ConfigError> {
        Self::with_config(priors.into_store()?, config)
    }

    pub fn with_observer(mut self, observer: Box<dyn UpdateObserver>) -> Self {
        self.engine = self.engine.with_observer(observer);
        self
    }

    pub fn apply<I, K, R>(
        &mut self,
        observations: I,
        trust_weight: f64,
        session: &str,
    ) -> PitwallResult<ApplyOutcome>
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: Borrow<u32>,
    {
        self.engine
            .apply(&mut self.store, observations, trust_weight, session)
    }

    pub fn apply_session<I, K, R>(
        &mut self,
        kind: SessionKind,
        session: &str,
        observations: I,
    ) -> PitwallResult<ApplyOutcome>
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: Borrow<u32>,
    {
        self.engine
            .apply_session(&mut self.store, kind, session, observations)
    }

    pub fn get(&self, id: &str) -> PitwallResult<&Belief> {
        self.store.get(id)
    }

    pub fn all(&self) -> BeliefSnapshot {
        self.store.all()
    }

    pub fn project(&self) -> Vec<Prediction> {
        self.projector.project(self.store.iter())
    }

    pub fn project_priors(&self) -> Vec<Prediction> {
        self.projector.project_priors(&self.store)
    }

    pub fn history(&self) -> &AuditLog {
        self.engine.history()
    }

    pub fn store(&self) -> &BeliefStore {
        &self.store
    }
}

/// Cloneable, thread-safe handle to one [`RatingTracker`].
///
/// `apply` holds the write lock for the whole batch; reads take the read
/// lock, so no reader sees a half-applied session.
#[derive(Clone)]
pub struct SharedTracker {
    inner: Arc<RwLock<RatingTracker>>,
}

impl SharedTracker {
    pub fn new(tracker: RatingTracker) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tracker)),
        }
    }

    fn read(&self) -> PitwallResult<RwLockReadGuard<'_, RatingTracker>> {
        self.inner
            .read()
            .map_err(|e| PitwallError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> PitwallResult<RwLockWriteGuard<'_, RatingTracker>> {
        self.inner
            .write()
            .map_err(|e| PitwallError::LockPoisoned(e.to_string()))
    }

    pub fn apply<I, K, R>(
        &self,
        observations: I,
        trust_weight: f64,
        session: &str,
    ) -> PitwallResult<ApplyOutcome>
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: Borrow<u32>,
    {
        self.write()?.apply(observations, trust_weight, session)
    }

    pub fn apply_session<I, K, R>(
        &self,
        kind: SessionKind,
        session: &str,
        observations: I,
    ) -> PitwallResult<ApplyOutcome>
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: Borrow<u32>,
    {
        self.write()?.apply_session(kind, session, observations)
    }

    /// Owned copy of one belief.
    pub fn get(&self, id: &str) -> PitwallResult<Belief> {
        self.read()?.get(id).cloned()
    }

    pub fn all(&self) -> PitwallResult<BeliefSnapshot> {
        Ok(self.read()?.all())
    }

    pub fn project(&self) -> PitwallResult<Vec<Prediction>> {
        Ok(self.read()?.project())
    }

    /// Owned copy of the audit trail.
    pub fn history(&self) -> PitwallResult<Vec<UpdateRecord>> {
        Ok(self.read()?.history().records().to_vec())
    }

    /// Run `f` under the read lock.
    pub fn with_read<T>(&self, f: impl FnOnce(&RatingTracker) -> T) -> PitwallResult<T> {
        Ok(f(&*self.read()?))
    }
}
