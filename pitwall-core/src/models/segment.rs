//! Auxiliary per-segment scores and the track weights that blend them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Track segment class an auxiliary score is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    SlowCorner,
    MediumCorner,
    HighCorner,
    Straight,
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Self::SlowCorner,
        Self::MediumCorner,
        Self::HighCorner,
        Self::Straight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SlowCorner => "slow_corner",
            Self::MediumCorner => "medium_corner",
            Self::HighCorner => "high_corner",
            Self::Straight => "straight",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Auxiliary scores for one entity. A missing segment counts as 0 when blended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentScores {
    pub slow_corner: Option<f64>,
    pub medium_corner: Option<f64>,
    pub high_corner: Option<f64>,
    pub straight: Option<f64>,
}

impl SegmentScores {
    pub fn get(&self, segment: Segment) -> Option<f64> {
        match segment {
            Segment::SlowCorner => self.slow_corner,
            Segment::MediumCorner => self.medium_corner,
            Segment::HighCorner => self.high_corner,
            Segment::Straight => self.straight,
        }
    }

    pub fn set(&mut self, segment: Segment, value: Option<f64>) {
        let slot = match segment {
            Segment::SlowCorner => &mut self.slow_corner,
            Segment::MediumCorner => &mut self.medium_corner,
            Segment::HighCorner => &mut self.high_corner,
            Segment::Straight => &mut self.straight,
        };
        *slot = value;
    }
}

/// Share of lap time spent in each segment class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackWeights {
    pub slow_corner_pct: f64,
    pub medium_corner_pct: f64,
    pub high_corner_pct: f64,
    pub straight_pct: f64,
}

impl TrackWeights {
    pub fn weight(&self, segment: Segment) -> f64 {
        match segment {
            Segment::SlowCorner => self.slow_corner_pct,
            Segment::MediumCorner => self.medium_corner_pct,
            Segment::HighCorner => self.high_corner_pct,
            Segment::Straight => self.straight_pct,
        }
    }

    /// Weighted sum of the given scores; missing segments contribute 0.
    pub fn signal(&self, scores: &SegmentScores) -> f64 {
        Segment::ALL
            .iter()
            .map(|&s| self.weight(s) * scores.get(s).unwrap_or(0.0))
            .sum()
    }
}

impl Default for TrackWeights {
    fn default() -> Self {
        Self {
            slow_corner_pct: 0.2,
            medium_corner_pct: 0.4,
            high_corner_pct: 0.2,
            straight_pct: 0.2,
        }
    }
}

/// One entity's auxiliary scores, as handed to a blending strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntity {
    pub entity_id: String,
    pub scores: SegmentScores,
}

impl ScoredEntity {
    pub fn new(entity_id: impl Into<String>, scores: SegmentScores) -> Self {
        Self {
            entity_id: entity_id.into(),
            scores,
        }
    }
}
