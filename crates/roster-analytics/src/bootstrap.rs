use std::path::{Path, PathBuf};
use std::sync::Mutex;

use roster_core::error::RosterError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name looked up when no catalog path is configured.
pub const DEFAULT_DATA_FILE: &str = "data.json";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map upper-case level names (DEBUG, WARNING, ...) onto `tracing` filter directives.
///
/// Unrecognised values are passed through so that full `EnvFilter`
/// directives such as `roster_data=debug` also work.
pub fn normalise_log_level(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" | "WARN" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Output goes to stderr so that stdout carries only query results. When
/// `log_file` is given, records are also appended there without ANSI colours.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(normalise_log_level(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Candidate catalog locations, in lookup order:
/// 1. `<cwd>/data.json`
/// 2. `~/.roster-analytics/data.json`
pub fn data_path_candidates(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(DEFAULT_DATA_FILE)];
    if let Some(home) = home {
        candidates.push(home.join(".roster-analytics").join(DEFAULT_DATA_FILE));
    }
    candidates
}

/// Locate the catalog snapshot: the explicit path when given, otherwise the
/// first existing default candidate.
pub fn resolve_data_path(explicit: Option<&PathBuf>) -> Result<PathBuf, RosterError> {
    if let Some(path) = explicit {
        return Ok(path.clone());
    }

    let cwd = std::env::current_dir()?;
    let home = dirs::home_dir();
    data_path_candidates(&cwd, home.as_deref())
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| {
            RosterError::Config(
                "no catalog snapshot found; pass --data-file or set ROSTER_DATA_FILE".to_string(),
            )
        })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
