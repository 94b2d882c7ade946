//! High-level, ergonomic library API: slice a sheet to files or to in-memory
//! buffers. Prefer these entrypoints over the low-level processing modules
//! when integrating SPRITECUT.
use std::fs;
use std::path::Path;

use chrono::Utc;
use image::{RgbaImage, imageops};
use tracing::{debug, info};

use crate::core::params::SliceParams;
use crate::core::processing::grid::tile_window;
use crate::core::processing::pipeline::refine_tile;
use crate::error::Result;
use crate::io::reader::load_sheet;
use crate::io::writers::manifest::{Manifest, ManifestEntry, write_manifest};
use crate::io::writers::png::write_rgba_png;
use crate::types::{GRID_COLS, GRID_ROWS, GridPos, POSE_LABELS, Rect};

/// One extracted pose, in memory.
#[derive(Debug, Clone)]
pub struct SlicedPose {
    pub label: &'static str,
    pub pos: GridPos,
    /// Capture window in sheet coordinates.
    pub window: Rect,
    /// Final crop in sheet coordinates; `None` when the cell held no content.
    pub content: Option<Rect>,
    pub image: RgbaImage,
}

/// Summary of a completed slicing run.
#[derive(Debug, Clone)]
pub struct SliceReport {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub written: usize,
    pub empty_tiles: usize,
}

/// Slice a sheet into its nine poses without writing anything to disk.
pub fn slice_sheet_to_buffers(input: &Path, params: &SliceParams) -> Result<Vec<SlicedPose>> {
    let sheet = load_sheet(input)?;
    Ok(slice_loaded_sheet(&sheet, params))
}

/// Walk the grid row-major: crop each capture window, refine it, and map
/// window-local crops back to sheet coordinates.
fn slice_loaded_sheet(sheet: &RgbaImage, params: &SliceParams) -> Vec<SlicedPose> {
    let (sheet_w, sheet_h) = sheet.dimensions();
    let mut poses = Vec::with_capacity(POSE_LABELS.len());

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let pos = GridPos::new(row, col);
            let window = tile_window(sheet_w, sheet_h, pos, params);
            debug!("{}: capture window {}", pos, window);

            let tile = imageops::crop_imm(
                sheet,
                window.left,
                window.top,
                window.width(),
                window.height(),
            )
            .to_image();
            let refined = refine_tile(&tile, pos, params);

            poses.push(SlicedPose {
                label: POSE_LABELS[pos.index()],
                pos,
                window,
                content: refined
                    .content_box
                    .map(|r| r.offset(window.left, window.top)),
                image: refined.image,
            });
        }
    }

    poses
}

/// Slice a sheet and write one PNG per pose into `output_dir`, named
/// `<prefix>_<label>.png`.
///
/// The output directory is created only after the sheet has loaded, so a
/// missing input aborts without touching the filesystem. Empty cells are
/// still written (uncropped) and counted in the report. With `manifest`
/// set, a `manifest.json` sidecar is written alongside the poses.
pub fn slice_sheet_to_path(
    input: &Path,
    output_dir: &Path,
    prefix: &str,
    params: &SliceParams,
    manifest: bool,
) -> Result<SliceReport> {
    let sheet = load_sheet(input)?;
    let (sheet_w, sheet_h) = sheet.dimensions();
    let poses = slice_loaded_sheet(&sheet, params);

    fs::create_dir_all(output_dir)?;

    let mut entries = Vec::with_capacity(poses.len());
    let mut empty_tiles = 0;
    for pose in &poses {
        if pose.content.is_none() {
            empty_tiles += 1;
        }

        let file = format!("{}_{}.png", prefix, pose.label);
        let path = output_dir.join(&file);
        write_rgba_png(&path, &pose.image)?;
        info!(
            "Saved: {:?} ({}x{})",
            path,
            pose.image.width(),
            pose.image.height()
        );

        entries.push(ManifestEntry {
            label: pose.label.to_string(),
            file,
            row: pose.pos.row,
            col: pose.pos.col,
            window: pose.window,
            content: pose.content,
            width: pose.image.width(),
            height: pose.image.height(),
        });
    }

    if manifest {
        write_manifest(
            output_dir,
            &Manifest {
                source: input.display().to_string(),
                sheet_width: sheet_w,
                sheet_height: sheet_h,
                generated: Utc::now(),
                poses: entries,
            },
        )?;
    }

    let written = poses.len();
    info!("Slicing complete: {} poses written to {:?}", written, output_dir);

    Ok(SliceReport {
        sheet_width: sheet_w,
        sheet_height: sheet_h,
        written,
        empty_tiles,
    })
}
