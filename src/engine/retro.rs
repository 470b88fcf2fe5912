//! Retrospective synthesis: sentiment classification and action items.
//!
//! Structured output only. Free-text elaboration (when a team wants it)
//! is a language-model collaborator's job, layered on top of this.

use crate::config::Thresholds;
use crate::schemas::RetrospectiveFeedback;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentVerdict {
    Positive,
    Neutral,
    NeedsAttention,
}

impl SentimentVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentVerdict::Positive => "positive",
            SentimentVerdict::Neutral => "neutral",
            SentimentVerdict::NeedsAttention => "needs_attention",
        }
    }
}

/// One follow-up generated from a needs-improvement entry. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub item: String,
    pub priority: Priority,
    pub owner: String,
}

/// Synthesized retrospective, echoing the raw feedback alongside the
/// derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retrospective {
    pub participant_count: usize,
    pub went_well: Vec<String>,
    pub needs_improvement: Vec<String>,
    pub action_items: Vec<ActionItem>,
    pub team_sentiment: SentimentVerdict,
}

/// Count ratio between the two feedback columns. One side has to outnumber
/// the other `sentiment_ratio`-fold to leave neutral, so the verdict is
/// symmetric under swapping the columns.
pub fn classify_sentiment(
    feedback: &RetrospectiveFeedback,
    thresholds: &Thresholds,
) -> SentimentVerdict {
    let positive = feedback.went_well.len() as f64;
    let negative = feedback.needs_improvement.len() as f64;

    if positive > negative * thresholds.sentiment_ratio {
        SentimentVerdict::Positive
    } else if negative > positive * thresholds.sentiment_ratio {
        SentimentVerdict::NeedsAttention
    } else {
        SentimentVerdict::Neutral
    }
}

pub fn synthesize(
    feedback: &RetrospectiveFeedback,
    participants: &[String],
    thresholds: &Thresholds,
) -> Retrospective {
    // Every improvement entry becomes a team-owned high-priority item;
    // per-item triage stays a human decision downstream.
    let action_items = feedback
        .needs_improvement
        .iter()
        .map(|item| ActionItem {
            item: item.clone(),
            priority: Priority::High,
            owner: "team".to_string(),
        })
        .collect();

    Retrospective {
        participant_count: participants.len(),
        went_well: feedback.went_well.clone(),
        needs_improvement: feedback.needs_improvement.clone(),
        action_items,
        team_sentiment: classify_sentiment(feedback, thresholds),
    }
}
