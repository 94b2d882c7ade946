//! Per-tile refinement pipeline: detect the opaque bounding box, trim edge
//! bleed, re-add a clean margin, crop, and tighten once more.

use image::{RgbaImage, imageops};
use tracing::{debug, warn};

use crate::core::params::SliceParams;
use crate::core::processing::bbox::opaque_bbox;
use crate::core::processing::bleed::{count_bands, trim_bleed};
use crate::core::processing::mask::alpha_mask;
use crate::types::{Edge, GridPos, Rect};

/// Outcome of refining one capture window.
#[derive(Debug, Clone)]
pub struct RefinedTile {
    pub image: RgbaImage,
    /// Final crop rectangle in capture-window coordinates; `None` when the
    /// window held no opaque content and was passed through unchanged.
    pub content_box: Option<Rect>,
    /// Edges where bleed was trimmed away.
    pub trimmed_edges: Vec<Edge>,
}

pub fn refine_tile(tile: &RgbaImage, pos: GridPos, params: &SliceParams) -> RefinedTile {
    let (tile_w, tile_h) = tile.dimensions();
    let mask = alpha_mask(tile);

    let Some(initial) = opaque_bbox(&mask.view()) else {
        warn!("{}: no opaque content detected, emitting tile unchanged", pos);
        return RefinedTile {
            image: tile.clone(),
            content_box: None,
            trimmed_edges: Vec::new(),
        };
    };
    debug!("{}: initial bounding box {}", pos, initial);

    let counts = count_bands(&mask.view(), initial, params.edge_band);
    let (trimmed_box, trimmed_edges) = trim_bleed(initial, &counts, tile_w, tile_h, params);
    for edge in &trimmed_edges {
        debug!("{}: trimmed bleed on {} edge", pos, edge);
    }

    let mut crop = trimmed_box.expand(params.box_margin, tile_w, tile_h);
    if crop.is_empty() {
        // Trimming collapsed the box; keep the untrimmed figure instead.
        crop = initial.expand(params.box_margin, tile_w, tile_h);
    }

    let mut out =
        imageops::crop_imm(tile, crop.left, crop.top, crop.width(), crop.height()).to_image();
    let mut content = crop;

    // Second pass: drop any empty border wider than 2 px that the
    // adjustment left behind.
    let out_mask = alpha_mask(&out);
    if let Some(fb) = opaque_bbox(&out_mask.view()) {
        let (w, h) = out.dimensions();
        if fb.left > 2 || fb.top > 2 || fb.right + 2 < w || fb.bottom + 2 < h {
            out = imageops::crop_imm(&out, fb.left, fb.top, fb.width(), fb.height()).to_image();
            content = fb.offset(crop.left, crop.top);
            debug!("{}: tightened to {}x{}", pos, out.width(), out.height());
        }
    }

    RefinedTile {
        image: out,
        content_box: Some(content),
        trimmed_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const OPAQUE: Rgba<u8> = Rgba([200, 40, 40, 255]);

    fn blank(w: u32, h: u32) -> RgbaImage {
        RgbaImage::new(w, h)
    }

    fn fill(img: &mut RgbaImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) {
        for y in ys {
            for x in xs.clone() {
                img.put_pixel(x, y, OPAQUE);
            }
        }
    }

    fn opaque_count(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p[3] > 0).count()
    }

    #[test]
    fn transparent_tile_passes_through_unchanged() {
        let tile = blank(64, 48);
        let refined = refine_tile(&tile, GridPos::new(0, 0), &SliceParams::default());
        assert_eq!(refined.image.dimensions(), (64, 48));
        assert!(refined.content_box.is_none());
        assert!(refined.trimmed_edges.is_empty());
    }

    #[test]
    fn centered_figure_is_cropped_to_content() {
        let mut tile = blank(100, 100);
        fill(&mut tile, 30..70, 30..70);

        let refined = refine_tile(&tile, GridPos::new(1, 1), &SliceParams::default());
        assert_eq!(refined.image.dimensions(), (40, 40));
        assert_eq!(refined.content_box, Some(Rect::new(30, 30, 70, 70)));
        assert_eq!(opaque_count(&refined.image), 40 * 40);
    }

    #[test]
    fn tight_sprite_is_left_unchanged() {
        let mut tile = blank(40, 40);
        fill(&mut tile, 0..40, 0..40);

        let refined = refine_tile(&tile, GridPos::new(0, 0), &SliceParams::default());
        assert_eq!(refined.image.dimensions(), (40, 40));
        assert!(refined.trimmed_edges.is_empty());
    }

    #[test]
    fn refining_is_idempotent_on_its_own_output() {
        let mut tile = blank(100, 100);
        fill(&mut tile, 30..70, 30..70);
        let params = SliceParams::default();

        let once = refine_tile(&tile, GridPos::new(0, 0), &params);
        let twice = refine_tile(&once.image, GridPos::new(0, 0), &params);
        assert_eq!(once.image.dimensions(), twice.image.dimensions());
        assert_eq!(once.image.as_raw(), twice.image.as_raw());
    }

    #[test]
    fn edge_bleed_is_excluded_from_the_output() {
        let mut tile = blank(120, 120);
        fill(&mut tile, 30..90, 30..90); // main figure
        fill(&mut tile, 2..3, 50..55); // neighbor bleed at the left edge

        let refined = refine_tile(&tile, GridPos::new(0, 1), &SliceParams::default());
        assert_eq!(refined.trimmed_edges, vec![Edge::Left]);
        // Only the figure survives: 60x60, every pixel opaque.
        assert_eq!(refined.image.dimensions(), (60, 60));
        assert_eq!(opaque_count(&refined.image), 60 * 60);
    }
}
