use serde::{Deserialize, Serialize};
use std::fmt;

/// A normal estimate of a latent rating: mean `mu`, standard deviation `sigma`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    pub mu: f64,
    pub sigma: f64,
}

impl Gaussian {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// `sigma²`.
    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    /// `1 / sigma²`. Infinite for a zero-width estimate.
    pub fn precision(&self) -> f64 {
        self.variance().recip()
    }

    /// Symmetric interval `mu ± z·sigma`, unclamped.
    pub fn interval(&self, z: f64) -> (f64, f64) {
        (self.mu - z * self.sigma, self.mu + z * self.sigma)
    }
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({:.3}, {:.3})", self.mu, self.sigma)
    }
}
