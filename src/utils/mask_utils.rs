//! Raster helpers for masks and masked compositing
//!
//! This module provides the pixel-level operations the nodes are built from:
//! cropping with out-of-range fill, pasting through a mask, alpha compositing,
//! box blurring, ellipse filling and mask inversion. All of them take
//! [`Rect`] regions in pixel coordinates and clip against the target image.

use image::{imageops, GrayImage, ImageBuffer, Luma, Pixel, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_ellipse_mut;
use imageproc::filter::box_filter;
use log::debug;

use crate::errors::{MaskKitError, MaskKitResult};
use crate::geometry::Rect;

/// Value of an unselected mask pixel
pub const MASK_CLEAR: u8 = 255;

/// Create a mask canvas with every pixel unselected (white)
pub fn blank_mask(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([MASK_CLEAR]))
}

/// Crop a region out of an image
///
/// The region may reach outside the image; pixels there take the `fill`
/// value. Degenerate regions are rejected.
///
/// # Arguments
/// * `image` - Source image
/// * `rect` - Region to crop, in source coordinates
/// * `fill` - Pixel value for the part of the region outside the source
///
/// # Returns
/// A new image of `rect.size()` or an error for a degenerate region
pub fn crop_with_fill<P>(
    image: &ImageBuffer<P, Vec<u8>>,
    rect: Rect,
    fill: P,
) -> MaskKitResult<ImageBuffer<P, Vec<u8>>>
where
    P: Pixel<Subpixel = u8>,
{
    if rect.is_degenerate() {
        return Err(MaskKitError::EmptyRegion(rect));
    }

    let (width, height) = (rect.width() as u32, rect.height() as u32);
    let mut cropped = ImageBuffer::from_pixel(width, height, fill);

    // copy the part of the region that overlaps the source
    let overlap = rect.intersect(&Rect::from_size(image.width(), image.height()));
    if !overlap.is_empty() {
        for y in overlap.top..overlap.bottom {
            for x in overlap.left..overlap.right {
                let pixel = *image.get_pixel(x as u32, y as u32);
                cropped.put_pixel((x - rect.left) as u32, (y - rect.top) as u32, pixel);
            }
        }
    }

    debug!("Cropped {}x{} image to {}", image.width(), image.height(), rect);
    Ok(cropped)
}

/// Crop an RGBA image, filling out-of-range pixels with transparent black
pub fn crop_rgba(image: &RgbaImage, rect: Rect) -> MaskKitResult<RgbaImage> {
    crop_with_fill(image, rect, Rgba([0, 0, 0, 0]))
}

/// Crop a mask, filling out-of-range pixels with black
pub fn crop_mask(mask: &GrayImage, rect: Rect) -> MaskKitResult<GrayImage> {
    crop_with_fill(mask, rect, Luma([0]))
}

/// Paste an image onto another at a position, optionally through a mask
///
/// Without a mask the overlay replaces the base pixels. With a mask each
/// channel becomes `overlay * m + base * (255 - m)` scaled by 255, so a
/// white mask pixel takes the overlay and a black one keeps the base. The
/// mask must have the overlay's dimensions. Parts of the overlay that fall
/// outside the base are clipped.
///
/// # Arguments
/// * `base` - Image to paste onto
/// * `overlay` - Image to paste
/// * `position` - Position of the overlay's top-left corner on the base
/// * `mask` - Optional per-pixel paste weight
pub fn paste<P>(
    base: &mut ImageBuffer<P, Vec<u8>>,
    overlay: &ImageBuffer<P, Vec<u8>>,
    position: (i64, i64),
    mask: Option<&GrayImage>,
) where
    P: Pixel<Subpixel = u8>,
{
    let (px, py) = position;
    let mask = match mask {
        Some(mask) => mask,
        None => {
            imageops::replace(base, overlay, px, py);
            return;
        }
    };

    // weighted paste through the mask
    let target = Rect::new(px, py, px + overlay.width() as i64, py + overlay.height() as i64)
        .intersect(&Rect::from_size(base.width(), base.height()));
    if target.is_empty() {
        return;
    }

    for y in target.top..target.bottom {
        for x in target.left..target.right {
            let (ox, oy) = ((x - px) as u32, (y - py) as u32);
            let weight = mask.get_pixel(ox, oy)[0] as u32;
            let over = overlay.get_pixel(ox, oy);
            let dest = base.get_pixel_mut(x as u32, y as u32);
            for (d, o) in dest.channels_mut().iter_mut().zip(over.channels()) {
                *d = blend(*o, *d, weight);
            }
        }
    }
}

fn blend(over: u8, base: u8, weight: u32) -> u8 {
    ((over as u32 * weight + base as u32 * (255 - weight) + 127) / 255) as u8
}

/// Extract the alpha channel of an RGBA image as a mask
pub fn alpha_channel(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| Luma([image.get_pixel(x, y)[3]]))
}

/// Composite `over` on top of `base` with the Porter-Duff "over" operator
///
/// Both images must have the same dimensions.
pub fn alpha_composite(base: &RgbaImage, over: &RgbaImage) -> RgbaImage {
    let mut result = base.clone();
    imageops::overlay(&mut result, over, 0, 0);
    result
}

/// Blur a mask with a square box filter
///
/// Every pixel becomes the mean of the `(2r+1) x (2r+1)` window around it.
/// Pixels beyond the border repeat the nearest edge pixel.
pub fn box_blur(mask: &GrayImage, radius: u32) -> GrayImage {
    if radius == 0 || mask.width() == 0 || mask.height() == 0 {
        return mask.clone();
    }
    box_filter(mask, radius, radius)
}

/// Fill the ellipse inscribed in a rectangle
///
/// The ellipse is centered on the rectangle and never touches pixels outside
/// it; an even side loses its last row or column. The rectangle may extend
/// past the image; only the visible part is drawn.
pub fn fill_ellipse<P>(image: &mut ImageBuffer<P, Vec<u8>>, rect: Rect, fill: P)
where
    P: Pixel<Subpixel = u8>,
{
    if rect.is_empty() {
        return;
    }

    let rx = (rect.width() - 1) / 2;
    let ry = (rect.height() - 1) / 2;
    let center = ((rect.left + rx) as i32, (rect.top + ry) as i32);
    draw_filled_ellipse_mut(image, center, rx as i32, ry as i32, fill);
}

/// Invert a mask so every value `v` becomes `255 - v`
pub fn invert_mask(mask: &GrayImage) -> GrayImage {
    let mut inverted = mask.clone();
    imageops::invert(&mut inverted);
    inverted
}
