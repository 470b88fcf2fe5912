//! Standup digest: pure aggregation of per-member updates.

use crate::schemas::StandupUpdate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandupDigest {
    pub updates: Vec<StandupUpdate>,
    pub blockers: Vec<String>,
    pub summary: String,
}

pub fn digest(updates: &[StandupUpdate]) -> StandupDigest {
    let blockers: Vec<String> = updates
        .iter()
        .flat_map(|u| u.blockers.iter().cloned())
        .collect();

    let summary = if blockers.is_empty() {
        format!(
            "Standup completed with {} team members. No blockers reported.",
            updates.len()
        )
    } else {
        format!(
            "Standup completed with {} team members. Identified {} blocker(s).",
            updates.len(),
            blockers.len()
        )
    };

    StandupDigest {
        updates: updates.to_vec(),
        blockers,
        summary,
    }
}
