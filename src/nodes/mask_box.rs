//! Crop an image and its mask to the padded bounding box of the mask

use image::{GrayImage, RgbaImage};
use log::{debug, info};

use crate::errors::{MaskKitError, MaskKitResult};
use crate::geometry::{calc_min_mask_box, Rect};
use crate::utils::mask_utils::{blank_mask, crop_mask, crop_rgba, paste};
use super::context::{Invocation, InvocationContext, MaskedCrop, MaskedCropOutput, NodeInfo};

/// Crop the image to the smallest rectangle around the mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskBox {
    /// The image to process
    pub image: String,
    /// The mask limiting the area
    pub mask: String,
    /// Offset of the mask on the X axis of the image
    pub mask_x: i64,
    /// Offset of the mask on the Y axis of the image
    pub mask_y: i64,
    /// Padding around the mask box on every side
    pub padding: u32,
}

impl MaskBox {
    pub fn new(image: &str, mask: &str) -> Self {
        MaskBox {
            image: image.to_string(),
            mask: mask.to_string(),
            mask_x: 0,
            mask_y: 0,
            padding: 50,
        }
    }
}

impl Invocation for MaskBox {
    type Output = MaskedCropOutput;

    const INFO: NodeInfo = NodeInfo {
        id: "mask_box",
        title: "Mask Box",
        tags: &["image", "inpaint"],
        category: "inpaint",
        version: "1.0.0",
        use_cache: true,
    };

    fn invoke(&self, context: &mut InvocationContext<'_>) -> MaskKitResult<MaskedCropOutput> {
        let image = context.get_rgba(&self.image)?;
        let mask = context.get_mask(&self.mask)?;

        let crop = crop_to_mask_box(&image, &mask, (self.mask_x, self.mask_y), self.padding)?;
        info!("Mask box of {} is {}", self.mask, crop.rect);
        context.save_crop(crop)
    }
}

/// Crop an image/mask pair to the padded bounding box of the mask
///
/// The mask sits at `mask_offset` on the image. When its size differs from
/// the image's, it is first pasted at that offset onto a white image-sized
/// canvas so both crops cover the same pixels.
///
/// # Arguments
/// * `image` - The image to crop
/// * `mask` - Mask selecting the region of interest
/// * `mask_offset` - Position of the mask on the image
/// * `padding` - Padding added around the mask box on every side
///
/// # Returns
/// The cropped pair and its region, or `EmptyRegion` when the padded box
/// does not overlap the image or has no area. The mask box ends on the last
/// active column and row, so a single active pixel, row or column with
/// `padding = 0` yields a zero-area box and is reported as `EmptyRegion`
/// because there is no pixel to crop.
pub fn crop_to_mask_box(
    image: &RgbaImage,
    mask: &GrayImage,
    mask_offset: (i64, i64),
    padding: u32,
) -> MaskKitResult<MaskedCrop> {
    let (mask_x, mask_y) = mask_offset;
    let mask_rect = calc_min_mask_box(mask).offset(Some(mask_x), Some(mask_y));

    let image_rect = Rect::from_size(image.width(), image.height());
    let rect = mask_rect.pad(padding as i64).intersect(&image_rect);
    if rect.is_degenerate() || rect.is_empty() {
        return Err(MaskKitError::EmptyRegion(rect));
    }

    let cropped_mask = if mask.dimensions() != image.dimensions() {
        debug!(
            "Placing {}x{} mask at ({}, {}) on a {}x{} canvas",
            mask.width(), mask.height(), mask_x, mask_y, image.width(), image.height()
        );
        let mut canvas = blank_mask(image.width(), image.height());
        paste(&mut canvas, mask, mask_offset, None);
        crop_mask(&canvas, rect)?
    } else {
        crop_mask(mask, rect)?
    };

    Ok(MaskedCrop {
        image: crop_rgba(image, rect)?,
        mask: cropped_mask,
        rect,
    })
}
