use serde::{Deserialize, Serialize};

/// Slicing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceParams {
    /// Extra pixels captured around each nominal grid cell, so figures that
    /// overhang their cell are not cut off
    pub cell_margin: u32,
    /// Width in pixels of the band inspected along each tile edge
    pub edge_band: u32,
    /// Bands holding at least this many opaque pixels are never trimmed
    pub min_edge_pixels: usize,
    /// Bands must also hold less than this fraction of the central count
    pub center_ratio: f64,
    /// Clean margin re-added around the adjusted bounding box
    pub box_margin: u32,
}

impl Default for SliceParams {
    fn default() -> Self {
        Self {
            cell_margin: 20,
            edge_band: 20,
            min_edge_pixels: 30,
            center_ratio: 0.1,
            box_margin: 3,
        }
    }
}
