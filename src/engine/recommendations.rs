//! Actionable recommendations derived from the same metrics snapshot as
//! the insights. Independent rules, listed order, possibly empty output.

use super::Rule;
use super::metrics::Metrics;
use crate::config::Thresholds;
use once_cell::sync::Lazy;
use tracing::debug;

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            name: "scope_pressure",
            applies: |m, t| {
                m.completion_rate < t.scope_completion_rate && m.days_remaining < m.days_elapsed
            },
            render: |_| "Consider scope reduction or sprint extension discussion".to_string(),
        },
        Rule {
            name: "finish_wip_first",
            applies: |m, t| m.in_progress_points as f64 > m.total_points as f64 * t.wip_ratio,
            render: |_| {
                "Encourage team to complete in-progress items before starting new work".to_string()
            },
        },
    ]
});

pub fn generate(metrics: &Metrics, thresholds: &Thresholds) -> Vec<String> {
    let mut recommendations = Vec::new();
    for rule in RULES.iter() {
        if (rule.applies)(metrics, thresholds) {
            debug!(rule = rule.name, "recommendation rule fired");
            recommendations.push((rule.render)(metrics));
        }
    }
    recommendations
}
