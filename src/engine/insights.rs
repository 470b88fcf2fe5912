//! Risk insight rules over sprint metrics.
//!
//! Three independent rules evaluated in listed order; zero to three
//! insights result, in rule order.

use super::Rule;
use super::metrics::Metrics;
use crate::config::Thresholds;
use once_cell::sync::Lazy;
use tracing::debug;

fn projected_completion_days(metrics: &Metrics) -> f64 {
    metrics.remaining_points as f64 / metrics.velocity
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            name: "sprint_at_risk",
            applies: |m, t| {
                m.completion_rate < t.low_completion_rate
                    && m.days_remaining < t.crunch_days_remaining
            },
            render: |_| {
                "⚠️ Sprint is at risk - low completion rate with few days remaining".to_string()
            },
        },
        Rule {
            name: "velocity_shortfall",
            applies: |m, _| {
                m.velocity > 0.0 && projected_completion_days(m) > m.days_remaining as f64
            },
            render: |m| {
                // Truncated, not rounded: "16.9 more days" reads as 16.
                format!(
                    "📊 Current velocity suggests {} more days needed, but only {} days remain",
                    projected_completion_days(m) as i64,
                    m.days_remaining
                )
            },
        },
        Rule {
            name: "wip_imbalance",
            applies: |m, _| m.in_progress_points > m.completed_points,
            render: |_| {
                "🔄 More work in progress than completed - consider focusing efforts".to_string()
            },
        },
    ]
});

pub fn generate(metrics: &Metrics, thresholds: &Thresholds) -> Vec<String> {
    let mut insights = Vec::new();
    for rule in RULES.iter() {
        if (rule.applies)(metrics, thresholds) {
            debug!(rule = rule.name, "insight rule fired");
            insights.push((rule.render)(metrics));
        }
    }
    insights
}
