//! Alpha masks: the single source of truth for "opaque" in the pipeline.
//! Fully transparent (alpha = 0) marks background; anything else counts as
//! part of a figure.

use image::RgbaImage;
use ndarray::{Array2, ArrayView2};

/// Opaque-pixel mask of a tile, shaped `(rows, cols)` like the image layout.
pub fn alpha_mask(img: &RgbaImage) -> Array2<bool> {
    let (w, h) = img.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(y, x)| {
        img.get_pixel(x as u32, y as u32)[3] > 0
    })
}

/// Number of opaque pixels in a mask region.
pub fn count_opaque(mask: &ArrayView2<bool>) -> usize {
    mask.iter().filter(|&&on| on).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn mask_tracks_alpha_only() {
        let mut img = RgbaImage::new(4, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(3, 1, Rgba([0, 0, 0, 1]));
        // Colored but fully transparent: still background.
        img.put_pixel(2, 0, Rgba([9, 9, 9, 0]));

        let mask = alpha_mask(&img);
        assert_eq!(mask.dim(), (2, 4));
        assert!(mask[(0, 0)]);
        assert!(mask[(1, 3)]);
        assert!(!mask[(0, 2)]);
        assert_eq!(count_opaque(&mask.view()), 2);
    }
}
