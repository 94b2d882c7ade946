use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;

/// Write an RGBA image as PNG, preserving transparency. The format is
/// forced regardless of the output extension.
pub fn write_rgba_png(path: &Path, img: &RgbaImage) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
