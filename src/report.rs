//! Report formatting: fixed textual templates over engine output.
//!
//! Presentation only. Nothing in this module decides anything; the
//! templates are kept byte-compatible with what the chat adapter has
//! always posted, emoji markers and blank-line layout included.

use crate::engine::health::HealthVerdict;
use crate::engine::metrics::Metrics;
use crate::engine::retro::Retrospective;
use crate::engine::velocity::VelocityAnalysis;
use crate::error::{Result, SprintMindError};
use crate::schemas::{SprintFacts, Story, StoryStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    SprintSummary,
    Retrospective,
    VelocityReport,
}

impl ReportKind {
    /// Parse the wire name of a report kind. Unknown kinds are an explicit
    /// error, never a silent default.
    pub fn parse(kind: &str) -> Result<Self> {
        match kind {
            "sprint_summary" => Ok(ReportKind::SprintSummary),
            "retrospective" => Ok(ReportKind::Retrospective),
            "velocity_report" => Ok(ReportKind::VelocityReport),
            other => Err(SprintMindError::UnknownReportKind {
                kind: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::SprintSummary => "sprint_summary",
            ReportKind::Retrospective => "retrospective",
            ReportKind::VelocityReport => "velocity_report",
        }
    }
}

/// Structured sprint summary handed to persistence alongside the rendered
/// text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintSummary {
    pub sprint_name: String,
    pub date_generated: String,
    pub duration: String,
    pub team_size: u32,
    pub committed_points: u32,
    pub completed_points: u32,
    pub completion_rate: String,
    pub velocity: f64,
    pub completed_stories: usize,
    pub incomplete_stories: usize,
    pub key_achievements: Vec<String>,
    pub challenges: Vec<String>,
    pub sprint_health: HealthVerdict,
}

impl SprintSummary {
    pub fn build(
        facts: &SprintFacts,
        metrics: &Metrics,
        stories: &[Story],
        blockers: &[String],
        health: HealthVerdict,
    ) -> Self {
        let completed_stories = stories
            .iter()
            .filter(|s| s.status == StoryStatus::Done)
            .count();
        // Top five completed titles stand in for "key achievements".
        let key_achievements = stories
            .iter()
            .filter(|s| s.status == StoryStatus::Done)
            .take(5)
            .map(|s| s.title.clone())
            .collect();

        SprintSummary {
            sprint_name: facts.name.clone(),
            date_generated: Utc::now().to_rfc3339(),
            duration: format!("{} days", facts.sprint_length_days),
            team_size: facts.team_size,
            committed_points: metrics.total_points,
            completed_points: metrics.completed_points,
            completion_rate: format!("{:.1}%", metrics.completion_rate),
            velocity: metrics.velocity,
            completed_stories,
            incomplete_stories: stories.len() - completed_stories,
            key_achievements,
            // First three open blockers stand in for "challenges".
            challenges: blockers.iter().take(3).cloned().collect(),
            sprint_health: health,
        }
    }
}

pub fn render_sprint_summary(summary: &SprintSummary) -> String {
    format!(
        "\n📊 Sprint Summary: {}\n\n\
         Duration: {}\n\
         Team Size: {}\n\n\
         Metrics:\n\
         - Committed: {} points\n\
         - Completed: {} points\n\
         - Completion Rate: {}\n\
         - Velocity: {:?} points/day\n\n\
         Stories:\n\
         - Completed: {}\n\
         - Incomplete: {}\n\n\
         Sprint Health: {}\n",
        summary.sprint_name,
        summary.duration,
        summary.team_size,
        summary.committed_points,
        summary.completed_points,
        summary.completion_rate,
        // Debug keeps the trailing .0 on whole-number velocities.
        summary.velocity,
        summary.completed_stories,
        summary.incomplete_stories,
        summary.sprint_health.as_str().to_uppercase(),
    )
}

/// Retrospective payload stamped for delivery. The synthesizer itself is
/// clock-free; the date goes on here, next to where the persistence and
/// chat adapters pick the payload up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrospectiveRecord {
    pub date: String,
    #[serde(flatten)]
    pub retrospective: Retrospective,
}

impl RetrospectiveRecord {
    pub fn build(retrospective: Retrospective) -> Self {
        RetrospectiveRecord {
            date: Utc::now().to_rfc3339(),
            retrospective,
        }
    }
}

pub fn render_retrospective(retro: &Retrospective) -> String {
    let went_well = retro
        .went_well
        .iter()
        .map(|item| format!("  ✅ {item}"))
        .collect::<Vec<_>>()
        .join("\n");
    let improvements = retro
        .needs_improvement
        .iter()
        .map(|item| format!("  ⚠️ {item}"))
        .collect::<Vec<_>>()
        .join("\n");
    let actions = retro
        .action_items
        .iter()
        .map(|a| format!("  🎯 {}", a.item))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n🔄 Sprint Retrospective\n\n\
         Team Sentiment: {}\n\
         Participants: {}\n\n\
         What Went Well:\n{}\n\n\
         Needs Improvement:\n{}\n\n\
         Action Items:\n{}\n",
        retro.team_sentiment.as_str().to_uppercase(),
        retro.participant_count,
        went_well,
        improvements,
        actions,
    )
}

pub fn render_velocity_report(analysis: &VelocityAnalysis) -> String {
    // Last five sprints only; older history stays in the structured data.
    let start = analysis.data.len().saturating_sub(5);
    let sprints = analysis.data[start..]
        .iter()
        .map(|p| {
            format!(
                "  {}: {}/{} points",
                p.sprint_name, p.completed_points, p.committed_points
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n📈 Velocity Report\n\n\
         Recent Sprints:\n{}\n\n\
         Average Velocity: {:.1} points\n",
        sprints, analysis.average_velocity,
    )
}
