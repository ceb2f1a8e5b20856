//! JSON snapshot loading for the catalog and image table.
//!
//! Timestamps in the snapshot are Unix epoch milliseconds; the top-level
//! document is `{"operators": {...}, "banners": {"EN": [...], "CN": [...]}}`.

use std::path::Path;

use roster_core::error::{Result, RosterError};
use roster_core::models::CatalogSnapshot;
use tracing::debug;

use crate::images::ImageTable;

/// Read and decode a catalog snapshot from `path`.
pub fn load_snapshot(path: &Path) -> Result<CatalogSnapshot> {
    let content = read_file(path)?;
    let snapshot = parse_snapshot(&content)?;
    debug!(
        "Decoded {} operators from {}",
        snapshot.operators.len(),
        path.display()
    );
    Ok(snapshot)
}

/// Decode a catalog snapshot from a JSON string.
pub fn parse_snapshot(content: &str) -> Result<CatalogSnapshot> {
    Ok(serde_json::from_str(content)?)
}

/// Read and decode an image table from `path`.
pub fn load_image_table(path: &Path) -> Result<ImageTable> {
    let content = read_file(path)?;
    let table: ImageTable = serde_json::from_str(&content)?;
    debug!("Decoded {} image contexts from {}", table.len(), path.display());
    Ok(table)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| RosterError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
