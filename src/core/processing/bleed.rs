//! Edge-bleed detection.
//!
//! Stray pixels from a neighboring pose can fall inside a tile's capture
//! margin. Each of the four fixed-width bands along the tile edges is
//! compared against the figure's central region; a band holding only a
//! sliver of content is interpreted as bleed and the bounding box is pulled
//! inward past it.

use ndarray::{ArrayView2, s};

use crate::core::params::SliceParams;
use crate::core::processing::mask::count_opaque;
use crate::types::{Edge, Rect};

/// Opaque-pixel counts for the four edge bands and the central region.
#[derive(Debug, Clone, Copy)]
pub struct BandCounts {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
    pub center: usize,
}

/// Count opaque pixels in the full-length edge bands of the tile and in the
/// central region (the bounding box inset by the band width on all sides).
pub fn count_bands(mask: &ArrayView2<bool>, bbox: Rect, band: u32) -> BandCounts {
    let (rows, cols) = mask.dim();
    let band = band as usize;

    let left = count_opaque(&mask.slice(s![.., ..band.min(cols)]));
    let right = count_opaque(&mask.slice(s![.., cols.saturating_sub(band)..]));
    let top = count_opaque(&mask.slice(s![..band.min(rows), ..]));
    let bottom = count_opaque(&mask.slice(s![rows.saturating_sub(band).., ..]));

    let center_left = bbox.left as usize + band;
    let center_right = (bbox.right as usize).saturating_sub(band);
    let center_top = bbox.top as usize + band;
    let center_bottom = (bbox.bottom as usize).saturating_sub(band);
    let center = if center_left < center_right && center_top < center_bottom {
        count_opaque(&mask.slice(s![center_top..center_bottom, center_left..center_right]))
    } else {
        0
    };

    BandCounts {
        left,
        right,
        top,
        bottom,
        center,
    }
}

/// Pull bounding-box edges inward past bands that read as bleed.
///
/// An edge is trimmed only when the band holds fewer than
/// `min_edge_pixels` opaque pixels, fewer than `center_ratio` of the
/// central count, and the bounding box actually reaches into that band.
/// Returns the adjusted box and the edges that were trimmed.
pub fn trim_bleed(
    bbox: Rect,
    counts: &BandCounts,
    tile_w: u32,
    tile_h: u32,
    params: &SliceParams,
) -> (Rect, Vec<Edge>) {
    let band = params.edge_band;
    let mut adjusted = bbox;
    let mut trimmed = Vec::new();

    let is_bleed = |n: usize| {
        n < params.min_edge_pixels
            && counts.center > 0
            && (n as f64) < counts.center as f64 * params.center_ratio
    };

    if is_bleed(counts.left) && bbox.left < band {
        adjusted.left = bbox.left.max(band);
        trimmed.push(Edge::Left);
    }
    if is_bleed(counts.right) && bbox.right > tile_w.saturating_sub(band) {
        adjusted.right = bbox.right.min(tile_w.saturating_sub(band));
        trimmed.push(Edge::Right);
    }
    if is_bleed(counts.top) && bbox.top < band {
        adjusted.top = bbox.top.max(band);
        trimmed.push(Edge::Top);
    }
    if is_bleed(counts.bottom) && bbox.bottom > tile_h.saturating_sub(band) {
        adjusted.bottom = bbox.bottom.min(tile_h.saturating_sub(band));
        trimmed.push(Edge::Bottom);
    }

    (adjusted, trimmed)
}
