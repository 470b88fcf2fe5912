//! Sprint analytics engine: deterministic, dependency-free heuristics.
//!
//! Every function in this module tree is a pure function of its inputs:
//! no clock, no I/O, no shared state. Fetching stories, persisting
//! results, and posting alerts all belong to the caller.

pub mod health;
pub mod insights;
pub mod metrics;
pub mod recommendations;
pub mod retro;
pub mod standup;
pub mod velocity;

use crate::config::Thresholds;
use crate::schemas::{SprintFacts, Story};
use health::HealthVerdict;
use metrics::Metrics;
use serde::{Deserialize, Serialize};

/// One classification rule: an independent predicate plus the message it
/// emits when it fires. Rules live in ordered slices; evaluation order is
/// slice order and every rule is checked regardless of earlier fires.
pub(crate) struct Rule {
    pub name: &'static str,
    pub applies: fn(&Metrics, &Thresholds) -> bool,
    pub render: fn(&Metrics) -> String,
}

/// Full tracking payload for one sprint, mirroring what the alerting and
/// persistence adapters consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintAnalysis {
    pub metrics: Metrics,
    pub sprint_health: HealthVerdict,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Run the whole tracking pipeline: metrics, then health, insights, and
/// recommendations fanned out from the same metrics snapshot.
pub fn analyze_sprint(
    stories: &[Story],
    facts: &SprintFacts,
    thresholds: &Thresholds,
) -> SprintAnalysis {
    let metrics = metrics::calculate(stories, facts);
    let sprint_health = health::assess(&metrics, thresholds);
    let insights = insights::generate(&metrics, thresholds);
    let recommendations = recommendations::generate(&metrics, thresholds);
    tracing::info!(
        sprint = %facts.name,
        health = sprint_health.as_str(),
        insights = insights.len(),
        recommendations = recommendations.len(),
        "sprint analysis complete"
    );
    SprintAnalysis {
        metrics,
        sprint_health,
        insights,
        recommendations,
    }
}
