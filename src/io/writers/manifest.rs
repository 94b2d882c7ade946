//! JSON manifest sidecar describing a slicing run: source sheet, grid
//! positions, capture windows, content boxes, and output filenames.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::types::Rect;

/// One extracted pose as recorded in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub label: String,
    pub file: String,
    pub row: u32,
    pub col: u32,
    /// Capture window in sheet coordinates.
    pub window: Rect,
    /// Final crop in sheet coordinates; `None` for an empty cell.
    pub content: Option<Rect>,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub source: String,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub generated: DateTime<Utc>,
    pub poses: Vec<ManifestEntry>,
}

/// Write `manifest.json` into the output directory.
pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<PathBuf> {
    let path = dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json)?;
    info!("Manifest written: {:?}", path);
    Ok(path)
}
