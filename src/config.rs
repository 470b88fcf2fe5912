use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from sprint_mind.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Classification thresholds for the analytics engine.
///
/// The defaults are the empirically tuned constants the engine has always
/// shipped with; they are configuration rather than literals so teams can
/// retune without a rebuild. Evaluation semantics (rule order, band
/// directions) are fixed — only the boundary values move.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Thresholds {
    /// Completion rate may lag time-elapsed rate by up to this many
    /// percentage points and still count as healthy.
    pub healthy_margin: f64,
    /// Lag beyond `healthy_margin` up to this margin is at-risk; anything
    /// worse is critical.
    pub at_risk_margin: f64,
    /// Completion rate (percent) below which the sprint-at-risk insight
    /// can fire.
    pub low_completion_rate: f64,
    /// Days-remaining ceiling for the sprint-at-risk insight.
    pub crunch_days_remaining: i64,
    /// Completion rate (percent) below which the scope-reduction
    /// recommendation can fire.
    pub scope_completion_rate: f64,
    /// In-progress points as a fraction of total points above which the
    /// finish-wip recommendation fires.
    pub wip_ratio: f64,
    /// Recent average must exceed overall average by this multiplier to
    /// classify the velocity trend as improving.
    pub improving_band: f64,
    /// Recent average must fall below overall average by this multiplier
    /// to classify the trend as declining.
    pub declining_band: f64,
    /// Count ratio separating positive / needs-attention sentiment from
    /// neutral.
    pub sentiment_ratio: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            healthy_margin: 10.0,
            at_risk_margin: 25.0,
            low_completion_rate: 30.0,
            crunch_days_remaining: 5,
            scope_completion_rate: 50.0,
            wip_ratio: 0.5,
            improving_band: 1.1,
            declining_band: 0.9,
            sentiment_ratio: 2.0,
        }
    }
}

impl Config {
    /// Load configuration: sprint_mind.toml when present, then SPRINT_*
    /// environment overrides, then validation.
    pub fn load() -> crate::error::Result<Self> {
        crate::load_env();
        let mut config = match std::fs::read_to_string("sprint_mind.toml") {
            Ok(raw) => toml::from_str::<Config>(&raw)?,
            Err(_) => Config::default(),
        };
        config.thresholds.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        self.thresholds.validate()
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.parse::<f64>().ok())
}

fn env_i64(key: &str) -> Option<i64> {
    std::env::var(key).ok().and_then(|v| v.parse::<i64>().ok())
}

impl Thresholds {
    /// Apply SPRINT_* environment variable overrides in place.
    pub fn apply_env(&mut self) {
        if let Some(v) = env_f64("SPRINT_HEALTHY_MARGIN") {
            self.healthy_margin = v;
        }
        if let Some(v) = env_f64("SPRINT_AT_RISK_MARGIN") {
            self.at_risk_margin = v;
        }
        if let Some(v) = env_f64("SPRINT_LOW_COMPLETION_RATE") {
            self.low_completion_rate = v;
        }
        if let Some(v) = env_i64("SPRINT_CRUNCH_DAYS_REMAINING") {
            self.crunch_days_remaining = v;
        }
        if let Some(v) = env_f64("SPRINT_SCOPE_COMPLETION_RATE") {
            self.scope_completion_rate = v;
        }
        if let Some(v) = env_f64("SPRINT_WIP_RATIO") {
            self.wip_ratio = v;
        }
        if let Some(v) = env_f64("SPRINT_IMPROVING_BAND") {
            self.improving_band = v;
        }
        if let Some(v) = env_f64("SPRINT_DECLINING_BAND") {
            self.declining_band = v;
        }
        if let Some(v) = env_f64("SPRINT_SENTIMENT_RATIO") {
            self.sentiment_ratio = v;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::SprintMindError;

        let fail = |message: &str| {
            Err(SprintMindError::Config {
                message: message.to_string(),
            })
        };

        if self.healthy_margin < 0.0 {
            return fail("SPRINT_HEALTHY_MARGIN must be >= 0");
        }
        if self.at_risk_margin < self.healthy_margin {
            return fail("SPRINT_AT_RISK_MARGIN must be at least the healthy margin");
        }
        if !(0.0..=100.0).contains(&self.low_completion_rate) {
            return fail("SPRINT_LOW_COMPLETION_RATE must be between 0 and 100");
        }
        if !(0.0..=100.0).contains(&self.scope_completion_rate) {
            return fail("SPRINT_SCOPE_COMPLETION_RATE must be between 0 and 100");
        }
        if !(0.0..=1.0).contains(&self.wip_ratio) {
            return fail("SPRINT_WIP_RATIO must be between 0.0 and 1.0");
        }
        if self.improving_band < 1.0 {
            return fail("SPRINT_IMPROVING_BAND must be >= 1.0");
        }
        if !(0.0..=1.0).contains(&self.declining_band) {
            return fail("SPRINT_DECLINING_BAND must be between 0.0 and 1.0");
        }
        if self.sentiment_ratio <= 0.0 {
            return fail("SPRINT_SENTIMENT_RATIO must be > 0");
        }
        Ok(())
    }
}
