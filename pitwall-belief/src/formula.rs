use pitwall_core::config::OutOfRangePolicy;
use pitwall_core::models::Gaussian;
use statrs::distribution::{ContinuousCDF, Normal};

/// Rank → evidence rating: `(K + 1) - rank`.
///
/// Linear and order-reversing: rank 1 maps to `K`, rank `K` maps to 1.
/// Ranks outside `1..=K` extrapolate.
pub fn rank_to_rating(rank: f64, scale: u32) -> f64 {
    f64::from(scale) + 1.0 - rank
}

/// Rating → expected rank. Exact inverse of [`rank_to_rating`].
pub fn rating_to_rank(mu: f64, scale: u32) -> f64 {
    f64::from(scale) + 1.0 - mu
}

/// Evidence sigma for a session: `base / trust_weight`.
///
/// Caller guarantees `trust_weight > 0`.
pub fn evidence_sigma(base_evidence_sigma: f64, trust_weight: f64) -> f64 {
    base_evidence_sigma / trust_weight
}

/// Precision-weighted fusion of two independent Gaussian estimates.
///
/// ```text
/// k                  = prior_var / (prior_var + evidence_var)
/// posterior_mu       = prior_mu + k × (evidence_mu - prior_mu)
/// posterior_variance = prior_var × evidence_var / (prior_var + evidence_var)
/// ```
///
/// Computed in variance form, dividing the smaller variance by the larger,
/// so no intermediate overflows for inputs whose variances are finite and
/// positive. The posterior variance never exceeds the smaller input variance.
pub fn fuse(prior: Gaussian, evidence: Gaussian) -> Gaussian {
    let prior_var = prior.variance();
    let evidence_var = evidence.variance();
    let (k, variance) = if prior_var <= evidence_var {
        let ratio = prior_var / evidence_var;
        (ratio / (1.0 + ratio), prior_var / (1.0 + ratio))
    } else {
        let ratio = evidence_var / prior_var;
        (1.0 / (1.0 + ratio), evidence_var / (1.0 + ratio))
    };
    let mu = prior.mu + k * (evidence.mu - prior.mu);
    Gaussian::new(mu, variance.sqrt())
}

/// True when `sigma²` is finite and strictly positive, so fusion stays finite.
pub fn usable_sigma(sigma: f64) -> bool {
    let variance = sigma * sigma;
    sigma > 0.0 && variance.is_finite() && variance > 0.0
}

/// True when `rank` lies in `1..=scale`.
pub fn rank_in_range(rank: u32, scale: u32) -> bool {
    (1..=scale).contains(&rank)
}

/// Apply the out-of-range policy. `None` means the rank must be rejected.
pub fn resolve_rank(rank: u32, scale: u32, policy: OutOfRangePolicy) -> Option<u32> {
    if rank_in_range(rank, scale) {
        return Some(rank);
    }
    match policy {
        OutOfRangePolicy::Extrapolate => Some(rank),
        OutOfRangePolicy::Clamp => Some(rank.clamp(1, scale.max(1))),
        OutOfRangePolicy::Reject => None,
    }
}

/// Two-sided standard-normal quantile for a central interval.
///
/// `z_for_confidence(0.95) ≈ 1.96`. `None` unless `0 < level < 1`.
pub fn z_for_confidence(level: f64) -> Option<f64> {
    if !(level > 0.0 && level < 1.0) {
        return None;
    }
    let standard = Normal::new(0.0, 1.0).ok()?;
    Some(standard.inverse_cdf((1.0 + level) / 2.0))
}
