//! Multi-sprint velocity trend classification.

use crate::config::Thresholds;
use crate::schemas::VelocityDataPoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendVerdict {
    InsufficientData,
    Improving,
    Declining,
    Stable,
}

impl TrendVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendVerdict::InsufficientData => "insufficient_data",
            TrendVerdict::Improving => "improving",
            TrendVerdict::Declining => "declining",
            TrendVerdict::Stable => "stable",
        }
    }
}

/// Velocity report payload for the reporting adapter: the echoed data
/// points, the plain mean throughput, and the trend classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityAnalysis {
    pub data: Vec<VelocityDataPoint>,
    pub average_velocity: f64,
    pub trend: TrendVerdict,
}

/// Arithmetic mean of completed points across all sprints; 0 with no data.
pub fn average_velocity(data: &[VelocityDataPoint]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|p| p.completed_points as f64).sum::<f64>() / data.len() as f64
}

/// Recent mean (last min(3, N) sprints) against the overall mean, with
/// multiplicative bands. Chronological oldest-first input assumed.
pub fn classify_trend(data: &[VelocityDataPoint], thresholds: &Thresholds) -> TrendVerdict {
    if data.len() < 2 {
        return TrendVerdict::InsufficientData;
    }
    let recent_n = data.len().min(3);
    let recent_avg = data[data.len() - recent_n..]
        .iter()
        .map(|p| p.completed_points as f64)
        .sum::<f64>()
        / recent_n as f64;
    let overall_avg = average_velocity(data);

    if recent_avg > overall_avg * thresholds.improving_band {
        TrendVerdict::Improving
    } else if recent_avg < overall_avg * thresholds.declining_band {
        TrendVerdict::Declining
    } else {
        TrendVerdict::Stable
    }
}

pub fn analyze(data: &[VelocityDataPoint], thresholds: &Thresholds) -> VelocityAnalysis {
    VelocityAnalysis {
        average_velocity: average_velocity(data),
        trend: classify_trend(data, thresholds),
        data: data.to_vec(),
    }
}
