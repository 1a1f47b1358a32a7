//! Bounding box of the active pixels in a mask

use image::GrayImage;
use log::debug;

use super::rect::Rect;

/// Luma values below this read as black in a 1-bit conversion
pub const ACTIVE_THRESHOLD: u8 = 128;

/// Check whether a mask value marks the region of interest
///
/// Masks use black (0) for the selected area and white (255) elsewhere.
pub fn is_active(value: u8) -> bool {
    value < ACTIVE_THRESHOLD
}

/// Calculate the smallest box around the active pixels of a mask
///
/// The right and bottom edges of the result are the coordinates of the last
/// active column and row, not one past them. A single active pixel therefore
/// yields a zero-area box at that pixel, and a mask without active pixels
/// yields the whole mask `(0, 0, width, height)`.
///
/// # Arguments
/// * `mask` - Single-channel mask to scan
///
/// # Returns
/// The normalized bounding rectangle
pub fn calc_min_mask_box(mask: &GrayImage) -> Rect {
    let (width, height) = mask.dimensions();

    // start inverted so the first active pixel sets every edge
    let mut left = width as i64;
    let mut top = height as i64;
    let mut right = 0i64;
    let mut bottom = 0i64;

    for (x, y, pixel) in mask.enumerate_pixels() {
        if !is_active(pixel[0]) {
            continue;
        }
        let (x, y) = (x as i64, y as i64);
        left = left.min(x);
        right = right.max(x);
        top = top.min(y);
        bottom = bottom.max(y);
    }

    if left > right {
        std::mem::swap(&mut left, &mut right);
    }
    if top > bottom {
        std::mem::swap(&mut top, &mut bottom);
    }

    let rect = Rect::new(left, top, right, bottom);
    debug!("Minimal mask box of {}x{} mask: {}", width, height, rect);
    rect
}
