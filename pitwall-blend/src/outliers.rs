//! Median-absolute-deviation outlier filter for auxiliary scores.

use pitwall_core::models::{ScoredEntity, Segment};
use serde::Serialize;
use tracing::{debug, info};

use crate::stats;

/// Result of [`remove_outliers_mad`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutlierReport {
    /// Rows inside the bounds, in input order.
    pub kept: Vec<ScoredEntity>,
    /// Ids of dropped rows, in input order.
    pub removed: Vec<String>,
    /// Inclusive `(lower, upper)` bounds; `None` when no row had the segment.
    pub bounds: Option<(f64, f64)>,
}

impl OutlierReport {
    pub fn kept_ids(&self) -> impl Iterator<Item = &str> {
        self.kept.iter().map(|e| e.entity_id.as_str())
    }
}

/// Keep rows whose `segment` score lies within `median ± n_mad * MAD`.
///
/// The MAD is unscaled. Rows without a score for `segment` are dropped.
pub fn remove_outliers_mad(rows: &[ScoredEntity], segment: Segment, n_mad: f64) -> OutlierReport {
    let values: Vec<f64> = rows.iter().filter_map(|r| r.scores.get(segment)).collect();
    let bounds = stats::median(&values).zip(stats::median_abs_deviation(&values)).map(
        |(median, mad)| (median - n_mad * mad, median + n_mad * mad),
    );

    let mut report = OutlierReport {
        bounds,
        ..Default::default()
    };
    for row in rows {
        let inside = match (row.scores.get(segment), bounds) {
            (Some(v), Some((lower, upper))) => v >= lower && v <= upper,
            _ => false,
        };
        if inside {
            report.kept.push(row.clone());
        } else {
            report.removed.push(row.entity_id.clone());
        }
    }

    if report.removed.is_empty() {
        debug!(%segment, kept = report.kept.len(), "no outliers");
    } else {
        info!(
            %segment,
            removed = report.removed.len(),
            entities = ?report.removed,
            bounds = ?report.bounds,
            "removed outliers"
        );
    }
    report
}
