pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod schemas;

pub use config::{Config, Thresholds};
pub use engine::{SprintAnalysis, analyze_sprint};
pub use error::{Result, SprintMindError};

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
