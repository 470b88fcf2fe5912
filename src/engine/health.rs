//! Categorical sprint health from completion rate vs. time elapsed.

use super::metrics::Metrics;
use crate::config::Thresholds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthVerdict {
    Healthy,
    AtRisk,
    Critical,
}

impl HealthVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthVerdict::Healthy => "healthy",
            HealthVerdict::AtRisk => "at_risk",
            HealthVerdict::Critical => "critical",
        }
    }
}

/// Share of the sprint already spent, as a percentage. Derived from the
/// metrics' own elapsed/remaining fields so an overrun sprint reads as
/// over 100%. A zero-length span reads as 0.
fn time_elapsed_rate(metrics: &Metrics) -> f64 {
    let span = metrics.days_elapsed + metrics.days_remaining;
    if span == 0 {
        return 0.0;
    }
    metrics.days_elapsed as f64 / span as f64 * 100.0
}

/// First match wins: each band's boundary is a superset of the next, so
/// raising completion_rate can only move the verdict toward healthy.
pub fn assess(metrics: &Metrics, thresholds: &Thresholds) -> HealthVerdict {
    let elapsed_rate = time_elapsed_rate(metrics);
    if metrics.completion_rate >= elapsed_rate - thresholds.healthy_margin {
        HealthVerdict::Healthy
    } else if metrics.completion_rate >= elapsed_rate - thresholds.at_risk_margin {
        HealthVerdict::AtRisk
    } else {
        HealthVerdict::Critical
    }
}
