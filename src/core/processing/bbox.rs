//! Opaque bounding-box detection.

use ndarray::ArrayView2;

use crate::types::Rect;

/// Minimal rectangle containing all opaque pixels, or `None` for a fully
/// transparent tile. `right`/`bottom` are exclusive.
pub fn opaque_bbox(mask: &ArrayView2<bool>) -> Option<Rect> {
    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0usize;
    let mut max_y = 0usize;
    let mut found = false;

    for ((y, x), &on) in mask.indexed_iter() {
        if on {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !found {
        return None;
    }

    Some(Rect::new(
        min_x as u32,
        min_y as u32,
        (max_x + 1) as u32,
        (max_y + 1) as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn empty_mask_has_no_bbox() {
        let mask = Array2::from_elem((8, 8), false);
        assert_eq!(opaque_bbox(&mask.view()), None);
    }

    #[test]
    fn single_pixel_bbox_is_one_by_one() {
        let mut mask = Array2::from_elem((8, 8), false);
        mask[(3, 5)] = true;
        let bbox = opaque_bbox(&mask.view()).unwrap();
        assert_eq!(bbox, Rect::new(5, 3, 6, 4));
        assert_eq!(bbox.width(), 1);
        assert_eq!(bbox.height(), 1);
    }

    #[test]
    fn bbox_spans_scattered_pixels() {
        let mut mask = Array2::from_elem((10, 12), false);
        mask[(1, 2)] = true;
        mask[(7, 9)] = true;
        mask[(4, 4)] = true;
        assert_eq!(opaque_bbox(&mask.view()).unwrap(), Rect::new(2, 1, 10, 8));
    }
}
