//! Test fixture loader for Pitwall session replays, prior files, and blend inputs.
//!
//! Provides typed deserialization of the fixture files plus small prior
//! builders shared by integration tests across crates.

use std::collections::BTreeMap;
use std::path::PathBuf;

use pitwall_core::models::{EntityPrior, ScoredEntity, SessionKind};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// One recorded session: its kind, label, and observed ranks.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFixture {
    pub label: String,
    pub kind: SessionKind,
    /// Overrides the kind's trust weight when present.
    #[serde(default)]
    pub trust_weight: Option<f64>,
    pub results: BTreeMap<String, u32>,
}

impl SessionFixture {
    pub fn weight(&self) -> f64 {
        self.trust_weight
            .unwrap_or_else(|| self.kind.default_trust_weight())
    }
}

/// A race weekend replay.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekendFixture {
    pub event: String,
    pub sessions: Vec<SessionFixture>,
}

/// Load a weekend replay from `sessions/<name>.json`.
pub fn load_weekend(name: &str) -> WeekendFixture {
    load_fixture(&format!("sessions/{name}.json"))
}

/// Load auxiliary scores from `blend/<name>.json`.
pub fn load_scores(name: &str) -> Vec<ScoredEntity> {
    load_fixture(&format!("blend/{name}.json"))
}

/// Minimal prior: id doubles as display code.
pub fn prior(id: &str, mu: f64, sigma: f64) -> EntityPrior {
    EntityPrior::new(id, id.to_uppercase(), "Test Team", mu, sigma)
}

/// Priors from `(id, mu, sigma)` triples, in the given order.
pub fn priors(specs: &[(&str, f64, f64)]) -> Vec<EntityPrior> {
    specs
        .iter()
        .map(|&(id, mu, sigma)| prior(id, mu, sigma))
        .collect()
}

/// A small three-entity field with distinct priors.
pub fn small_field() -> Vec<EntityPrior> {
    priors(&[("x", 18.0, 4.0), ("y", 12.0, 5.0), ("z", 6.0, 7.0)])
}

/// Ranks `1..=n` assigned in the given id order.
pub fn finishing_order(ids: &[&str]) -> BTreeMap<String, u32> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| (id.to_string(), i as u32 + 1))
        .collect()
}
