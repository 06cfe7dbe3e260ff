//! Runtime configuration from environment variables (and `.env`)

use crate::types::{DEFAULT_TEAMS, MAX_TEAMS};
use std::path::PathBuf;

/// Where exports land when the host doesn't name a file
pub const DEFAULT_EXPORT_PATH: &str = "jeopardy_questions.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// CSV file loaded into the board at startup
    pub import_csv: Option<PathBuf>,
    /// Default destination for `export_csv`
    pub export_path: PathBuf,
    /// Number of teams on a fresh board (1..=MAX_TEAMS)
    pub teams: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            import_csv: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            teams: DEFAULT_TEAMS,
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl AppConfig {
    /// Load config from JEOPARDY_IMPORT_CSV, JEOPARDY_EXPORT_PATH and JEOPARDY_TEAMS
    pub fn from_env() -> Self {
        let import_csv = env_nonempty("JEOPARDY_IMPORT_CSV").map(PathBuf::from);

        let export_path = env_nonempty("JEOPARDY_EXPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));

        let teams = match env_nonempty("JEOPARDY_TEAMS").map(|v| v.parse::<usize>()) {
            Some(Ok(n)) if (1..=MAX_TEAMS).contains(&n) => n,
            Some(Ok(n)) => {
                let clamped = n.clamp(1, MAX_TEAMS);
                tracing::warn!("JEOPARDY_TEAMS={} out of range, using {}", n, clamped);
                clamped
            }
            Some(Err(e)) => {
                tracing::warn!(
                    "Invalid JEOPARDY_TEAMS ({}), using default of {}",
                    e,
                    DEFAULT_TEAMS
                );
                DEFAULT_TEAMS
            }
            None => DEFAULT_TEAMS,
        };

        Self {
            import_csv,
            export_path,
            teams,
        }
    }
}
