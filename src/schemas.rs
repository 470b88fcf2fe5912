//! Caller-supplied input records.
//!
//! These mirror the field names the issue-tracker and meeting adapters
//! produce: the engine takes them as immutable snapshots and never
//! mutates or validates them. Missing list fields deserialize as empty,
//! missing counters as zero.

use serde::{Deserialize, Serialize};

/// Workflow status of a story, as reported by the tracker adapter.
/// Anything the adapter reports outside the three known states maps to
/// `Other` instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    Backlog,
    InProgress,
    Done,
    #[default]
    #[serde(other)]
    Other,
}

/// One backlog item snapshot. Points are caller-estimated and not
/// validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub status: StoryStatus,
}

/// Sprint-level facts. `days_elapsed` may legitimately exceed
/// `sprint_length_days` for an overrunning sprint; downstream metrics
/// report a negative `days_remaining` rather than clamping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintFacts {
    pub name: String,
    #[serde(default)]
    pub team_size: u32,
    #[serde(default = "default_sprint_length")]
    pub sprint_length_days: i64,
    #[serde(default)]
    pub days_elapsed: i64,
}

fn default_sprint_length() -> i64 {
    14
}

/// One historical sprint's throughput, supplied oldest-first by the
/// persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelocityDataPoint {
    pub sprint_name: String,
    #[serde(default)]
    pub completed_points: u32,
    #[serde(default)]
    pub committed_points: u32,
}

/// Raw retrospective feedback collected by the meeting adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrospectiveFeedback {
    #[serde(default)]
    pub went_well: Vec<String>,
    #[serde(default)]
    pub needs_improvement: Vec<String>,
}

/// One team member's standup answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandupUpdate {
    pub member: String,
    #[serde(default)]
    pub yesterday: String,
    #[serde(default)]
    pub today: String,
    #[serde(default)]
    pub blockers: Vec<String>,
}
