//! Sheet loading: explicit missing-file check, decode, RGBA8 normalization.

use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::{Error, Result};

/// Open the sprite sheet and normalize it to RGBA8.
///
/// A missing file is reported as [`Error::MissingInput`] before any decode
/// is attempted, so callers can abort cleanly without touching the output
/// directory. Sheets in other color modes are converted; fully transparent
/// pixels mark background throughout the pipeline.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::MissingInput {
            path: path.display().to_string(),
        });
    }

    let sheet = image::open(path)?.to_rgba8();
    info!("Sheet dimensions: {}x{}", sheet.width(), sheet.height());
    Ok(sheet)
}
