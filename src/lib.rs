#![doc = r#"
SPRITECUT — a sprite-sheet pose extractor.

This crate turns a single transparently-backed sprite sheet laid out as a
3x3 grid of character poses into nine individually named PNG files, each
cropped to the tight bounding box of its figure. Stray pixels leaking in
from neighboring poses ("bleed") are detected along the tile edges and
trimmed away before cropping. It powers the SPRITECUT CLI and can be
embedded in your own Rust applications.

How it slices
-------------
For each grid cell the sheet is cropped with a generous capture margin, so
figures that overhang their nominal cell are not cut off. Within that
capture window the extractor finds the minimal rectangle containing all
opaque pixels, inspects a fixed-width band along each window edge, and
pulls the box inward wherever a band holds only a sliver of content
compared to the figure's center. A small clean margin is re-added, the
window is cropped, and a second bounding-box pass drops any empty border
the adjustment left behind.

Add dependency
--------------
```toml
[dependencies]
spritecut = "0.1"
```

Quick start: slice a sheet to a directory
-----------------------------------------
```rust,no_run
use std::path::Path;
use spritecut::{slice_sheet_to_path, SliceParams};

fn main() -> spritecut::Result<()> {
    let params = SliceParams::default();
    let report = slice_sheet_to_path(
        Path::new("images/monkey_poses-removebg-preview.png"),
        Path::new("images/monkey_poses"),
        "monkey",
        &params,
        false, // manifest sidecar
    )?;
    println!("written={} empty={}", report.written, report.empty_tiles);
    Ok(())
}
```

Slice in-memory to `SlicedPose` buffers
---------------------------------------
```rust,no_run
use std::path::Path;
use spritecut::{slice_sheet_to_buffers, SliceParams};

fn main() -> spritecut::Result<()> {
    let poses = slice_sheet_to_buffers(
        Path::new("images/monkey_poses-removebg-preview.png"),
        &SliceParams::default(),
    )?;

    for pose in &poses {
        // Use `pose.image` in your own pipeline, or consult `pose.window`
        // and `pose.content` for sheet-space coordinates.
        println!("{}: {}x{}", pose.label, pose.image.width(), pose.image.height());
    }
    Ok(())
}
```

Tuning the heuristic
--------------------
`SliceParams` carries the capture margin, the edge-band width, and the
bleed thresholds. The defaults are tuned for hand-drawn sheets with clear
gaps between poses; presets can be stored as JSON and loaded with serde.

```rust
use spritecut::SliceParams;

let mut params = SliceParams::default();
params.cell_margin = 32; // capture more overhang
```

Error handling
--------------
All public functions return `spritecut::Result<T>`; match on
`spritecut::Error` to handle specific cases, e.g. a missing input sheet.

```rust,no_run
use std::path::Path;
use spritecut::{slice_sheet_to_path, Error, SliceParams};

fn main() {
    match slice_sheet_to_path(
        Path::new("/bad/sheet.png"),
        Path::new("/out"),
        "monkey",
        &SliceParams::default(),
        false,
    ) {
        Ok(report) => println!("{} poses written", report.written),
        Err(Error::MissingInput { path }) => eprintln!("no sheet at {path}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — `Rect`, `GridPos`, `Edge`, grid constants, pose labels.
- [`io`] — sheet reader and PNG/manifest writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::SliceParams;
pub use crate::error::{Error, Result};
pub use crate::types::{Edge, GRID_COLS, GRID_ROWS, GridPos, POSE_LABELS, Rect};

// Readers
pub use crate::io::reader::load_sheet;

// Selected writer helpers (keep the manifest types public)
pub use crate::io::writers::manifest::{Manifest, ManifestEntry};

// High-level API re-exports
pub use crate::api::{SliceReport, SlicedPose, slice_sheet_to_buffers, slice_sheet_to_path};
