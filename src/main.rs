//! Thin CLI over the sprint analytics engine.
//!
//! Reads JSON snapshots (file or stdin) the adapters would normally hand
//! over in-process, runs the pure engine, and prints either structured
//! JSON or a rendered report. No decision logic lives here.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use sprint_mind::config::Config;
use sprint_mind::engine::{analyze_sprint, retro, standup, velocity};
use sprint_mind::report::{
    ReportKind, RetrospectiveRecord, SprintSummary, render_retrospective, render_sprint_summary,
    render_velocity_report,
};
use sprint_mind::schemas::{
    RetrospectiveFeedback, SprintFacts, StandupUpdate, Story, VelocityDataPoint,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sprint-mind",
    about = "Deterministic sprint analytics over JSON snapshots"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute metrics, health, insights, and recommendations for a sprint
    Track {
        /// JSON file with {"sprint": {...}, "stories": [...]}; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Classify the velocity trend over sprint history
    Velocity {
        /// JSON file with {"history": [...]}; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Synthesize a retrospective from collected feedback
    Retro {
        /// JSON file with {"feedback": {...}, "participants": [...]}; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Digest standup updates into blockers and a summary line
    Standup {
        /// JSON file with {"updates": [...]}; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Render a formatted report of the given kind
    Report {
        /// Report kind: sprint_summary, retrospective, or velocity_report
        kind: String,
        /// JSON file with the fields the kind needs; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Deserialize)]
struct TrackInput {
    sprint: SprintFacts,
    #[serde(default)]
    stories: Vec<Story>,
}

#[derive(Deserialize)]
struct VelocityInput {
    #[serde(default)]
    history: Vec<VelocityDataPoint>,
}

#[derive(Deserialize)]
struct RetroInput {
    #[serde(default)]
    feedback: RetrospectiveFeedback,
    #[serde(default)]
    participants: Vec<String>,
}

#[derive(Deserialize)]
struct StandupInput {
    #[serde(default)]
    updates: Vec<StandupUpdate>,
}

/// One permissive context shape for `report`, mirroring what the
/// orchestration layer passes: each kind picks the fields it needs.
#[derive(Deserialize)]
struct ReportInput {
    sprint: Option<SprintFacts>,
    #[serde(default)]
    stories: Vec<Story>,
    #[serde(default)]
    blockers: Vec<String>,
    #[serde(default)]
    history: Vec<VelocityDataPoint>,
    #[serde(default)]
    feedback: RetrospectiveFeedback,
    #[serde(default)]
    participants: Vec<String>,
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    sprint_mind::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sprint_mind=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let thresholds = &config.thresholds;

    match cli.command {
        Command::Track { input } => {
            let input: TrackInput = serde_json::from_str(&read_input(&input)?)?;
            let analysis = analyze_sprint(&input.stories, &input.sprint, thresholds);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Velocity { input } => {
            let input: VelocityInput = serde_json::from_str(&read_input(&input)?)?;
            let analysis = velocity::analyze(&input.history, thresholds);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Retro { input } => {
            let input: RetroInput = serde_json::from_str(&read_input(&input)?)?;
            let synthesis = retro::synthesize(&input.feedback, &input.participants, thresholds);
            let record = RetrospectiveRecord::build(synthesis);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Standup { input } => {
            let input: StandupInput = serde_json::from_str(&read_input(&input)?)?;
            let digest = standup::digest(&input.updates);
            println!("{}", serde_json::to_string_pretty(&digest)?);
        }
        Command::Report { kind, input } => {
            let kind = ReportKind::parse(&kind)?;
            let input: ReportInput = serde_json::from_str(&read_input(&input)?)?;
            let rendered = match kind {
                ReportKind::SprintSummary => {
                    let facts = input
                        .sprint
                        .context("sprint_summary requires a \"sprint\" object")?;
                    let metrics = sprint_mind::engine::metrics::calculate(&input.stories, &facts);
                    let health = sprint_mind::engine::health::assess(&metrics, thresholds);
                    let summary = SprintSummary::build(
                        &facts,
                        &metrics,
                        &input.stories,
                        &input.blockers,
                        health,
                    );
                    render_sprint_summary(&summary)
                }
                ReportKind::Retrospective => {
                    let synthesis =
                        retro::synthesize(&input.feedback, &input.participants, thresholds);
                    render_retrospective(&synthesis)
                }
                ReportKind::VelocityReport => {
                    let analysis = velocity::analyze(&input.history, thresholds);
                    render_velocity_report(&analysis)
                }
            };
            print!("{rendered}");
        }
    }
    Ok(())
}
