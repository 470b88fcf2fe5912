//! Point totals, completion rate, and velocity for a single sprint.

use crate::schemas::{SprintFacts, Story, StoryStatus};
use serde::{Deserialize, Serialize};

/// Derived sprint metrics. Recomputed on every call; never cached or
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_points: u32,
    pub completed_points: u32,
    pub in_progress_points: u32,
    pub remaining_points: u32,
    /// Percent in [0, 100]; defined as 0 when there are no points at all.
    pub completion_rate: f64,
    /// Completed points per elapsed day; 0 before the sprint has started.
    pub velocity: f64,
    pub days_elapsed: i64,
    /// May be negative for an overrunning sprint; never clamped.
    pub days_remaining: i64,
}

fn points_with(stories: &[Story], status: StoryStatus) -> u32 {
    stories
        .iter()
        .filter(|s| s.status == status)
        .map(|s| s.points)
        .sum()
}

pub fn calculate(stories: &[Story], facts: &SprintFacts) -> Metrics {
    let total_points: u32 = stories.iter().map(|s| s.points).sum();
    let completed_points = points_with(stories, StoryStatus::Done);
    let in_progress_points = points_with(stories, StoryStatus::InProgress);

    let completion_rate = if total_points > 0 {
        completed_points as f64 / total_points as f64 * 100.0
    } else {
        0.0
    };
    let velocity = if facts.days_elapsed > 0 {
        completed_points as f64 / facts.days_elapsed as f64
    } else {
        0.0
    };

    Metrics {
        total_points,
        completed_points,
        in_progress_points,
        remaining_points: total_points - completed_points,
        completion_rate,
        velocity,
        days_elapsed: facts.days_elapsed,
        days_remaining: facts.sprint_length_days - facts.days_elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(points: u32, status: StoryStatus) -> Story {
        Story {
            title: format!("{points}-pointer"),
            points,
            status,
        }
    }

    #[test]
    fn empty_backlog_yields_all_zeroes() {
        let facts = SprintFacts {
            name: "empty".into(),
            team_size: 3,
            sprint_length_days: 10,
            days_elapsed: 0,
        };
        let m = calculate(&[], &facts);
        assert_eq!(m.total_points, 0);
        assert_eq!(m.completion_rate, 0.0);
        assert_eq!(m.velocity, 0.0);
        assert_eq!(m.days_remaining, 10);
    }

    #[test]
    fn overrun_sprint_reports_negative_days_remaining() {
        let facts = SprintFacts {
            name: "overrun".into(),
            team_size: 4,
            sprint_length_days: 14,
            days_elapsed: 17,
        };
        let m = calculate(&[story(8, StoryStatus::Done)], &facts);
        assert_eq!(m.days_remaining, -3);
        assert!((m.velocity - 8.0 / 17.0).abs() < 1e-12);
    }

    #[test]
    fn other_status_counts_toward_total_only() {
        let facts = SprintFacts {
            name: "mixed".into(),
            team_size: 2,
            sprint_length_days: 14,
            days_elapsed: 1,
        };
        let m = calculate(
            &[story(5, StoryStatus::Other), story(5, StoryStatus::Done)],
            &facts,
        );
        assert_eq!(m.total_points, 10);
        assert_eq!(m.completed_points, 5);
        assert_eq!(m.in_progress_points, 0);
        assert_eq!(m.remaining_points, 5);
    }
}
