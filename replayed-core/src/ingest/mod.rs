//! Ingestion layer for streaming-history exports
//!
//! An export is a set of plain JSON files, each holding one array of play
//! events. This module discovers those files, parses them, and concatenates
//! them into a single event sequence in file order. Order within a file is
//! the export's own order and is preserved as-is.
//!
//! IO and JSON failures here are fatal: a half-loaded history would produce
//! silently wrong statistics, so the run aborts instead.

use crate::error::{Error, Result};
use crate::types::PlayEvent;
use std::path::{Path, PathBuf};

/// Load one history file: a JSON array of play events.
pub fn load_history_file(path: &Path) -> Result<Vec<PlayEvent>> {
    let content = std::fs::read_to_string(path)?;
    let events: Vec<PlayEvent> = serde_json::from_str(&content)?;

    tracing::debug!(
        path = %path.display(),
        events = events.len(),
        "Loaded history file"
    );

    Ok(events)
}

/// Load several history files and concatenate them in the given order.
pub fn load_history<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PlayEvent>> {
    let mut all_events = Vec::new();
    for path in paths {
        let events = load_history_file(path.as_ref())?;
        all_events.extend(events);
    }

    tracing::info!(
        files = paths.len(),
        events = all_events.len(),
        "Loaded streaming history"
    );

    Ok(all_events)
}

/// Discover history files (`*.json`) in a directory.
///
/// Results are sorted by path so repeated runs see the same file order and
/// produce the same combined sequence.
pub fn discover_history_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.json");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Discovery(format!("non-UTF-8 path: {:?}", dir)))?;

    let mut paths: Vec<PathBuf> = glob::glob(pattern)
        .map_err(|e| Error::Discovery(format!("bad glob pattern {:?}: {}", pattern, e)))?
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort();

    tracing::debug!(dir = %dir.display(), files = paths.len(), "Discovered history files");

    Ok(paths)
}
