//! Fill randomly placed solid shapes onto an image
//!
//! Shapes are ellipses drawn inside a working region: the bounding box of a
//! limiting mask, or the whole image when there is none. A coverage mask
//! records where shapes landed; it is feathered with a box blur and used to
//! pick the final, padded crop.

use image::{GrayImage, Luma, RgbaImage};
use log::{debug, info};
use rand::Rng;

use crate::errors::{MaskKitError, MaskKitResult};
use crate::geometry::{calc_min_mask_box, Rect};
use crate::utils::color_utils::Color;
use crate::utils::mask_utils::{
    alpha_channel, alpha_composite, blank_mask, box_blur, crop_mask, crop_rgba, fill_ellipse, paste,
};
use super::context::{Invocation, InvocationContext, MaskedCrop, MaskedCropOutput, NodeInfo};

/// Radius of the box blur that feathers the coverage mask
pub const MASK_BLUR_RADIUS: u32 = 4;

/// Extra size of a shape on the coverage mask compared to the image
pub const MASK_EDGE_SIZE: i64 = 0;

/// Shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSettings {
    /// Number of shapes
    pub num_shapes: u32,
    /// Min size of shapes in pixels
    pub min_size: u32,
    /// Max size of shapes in pixels
    pub max_size: u32,
    /// The color to fill shapes with
    pub color: Color,
    /// Padding around the output mask on every side
    pub padding: u32,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        ShapeSettings {
            num_shapes: 3,
            min_size: 5,
            max_size: 20,
            color: Color::default(),
            padding: 50,
        }
    }
}

/// Draw random ellipses onto an image
///
/// # Arguments
/// * `image` - The image to draw on; it is not modified
/// * `limit` - Optional limiting mask and its position on the image.
///   Shapes are only visible where the mask is active.
/// * `settings` - Shape count, size range, color and output padding
/// * `rng` - Random source for shape placement
///
/// # Returns
/// The edited image and coverage mask, cropped to the padded box around
/// the shapes
pub fn fill_shapes<R: Rng + ?Sized>(
    image: &RgbaImage,
    limit: Option<(&GrayImage, (i64, i64))>,
    settings: &ShapeSettings,
    rng: &mut R,
) -> MaskKitResult<MaskedCrop> {
    if settings.min_size > settings.max_size {
        return Err(MaskKitError::GenericError(format!(
            "min_size {} is larger than max_size {}",
            settings.min_size, settings.max_size
        )));
    }

    let image_rect = Rect::from_size(image.width(), image.height());

    // draw_box is in mask coordinates, draw_box_on_img in image coordinates
    let (draw_box, draw_box_on_img) = match limit {
        Some((mask, offset)) => {
            let draw_box = calc_min_mask_box(mask);
            (draw_box, draw_box.offset_by(offset))
        }
        None => (image_rect, image_rect),
    };
    if draw_box.is_empty() {
        return Err(MaskKitError::EmptyRegion(draw_box));
    }
    debug!("Drawing {} shapes inside {}", settings.num_shapes, draw_box_on_img);

    let original = crop_rgba(image, draw_box_on_img)?;
    let mut canvas = original.clone();
    let (width, height) = (draw_box.width() as u32, draw_box.height() as u32);
    let mut coverage = blank_mask(width, height);

    for _ in 0..settings.num_shapes {
        draw_shape(&mut canvas, &mut coverage, settings, rng);
    }
    let mut coverage = box_blur(&coverage, MASK_BLUR_RADIUS);

    let (composited, full_mask) = match limit {
        Some((mask, _)) => {
            // restore everything outside the limiting mask
            let limit_crop = crop_mask(mask, draw_box)?;
            paste(&mut canvas, &original, (0, 0), Some(&limit_crop));
            paste(&mut coverage, &blank_mask(width, height), (0, 0), Some(&limit_crop));

            let mut composited = image.clone();
            let alpha = alpha_channel(&canvas);
            paste(&mut composited, &canvas, draw_box_on_img.position(), Some(&alpha));

            let mut full_mask = blank_mask(image.width(), image.height());
            paste(&mut full_mask, &coverage, draw_box_on_img.position(), None);
            (composited, full_mask)
        }
        None => (alpha_composite(image, &canvas), coverage.clone()),
    };

    // the coverage mask is smaller than the image, so scan that one
    let rect = calc_min_mask_box(&coverage)
        .offset_by(draw_box_on_img.position())
        .pad(settings.padding as i64)
        .intersect(&image_rect);
    if rect.is_degenerate() || rect.is_empty() {
        return Err(MaskKitError::EmptyRegion(rect));
    }

    Ok(MaskedCrop {
        image: crop_rgba(&composited, rect)?,
        mask: crop_mask(&full_mask, rect)?,
        rect,
    })
}

fn draw_shape<R: Rng + ?Sized>(
    canvas: &mut RgbaImage,
    coverage: &mut GrayImage,
    settings: &ShapeSettings,
    rng: &mut R,
) {
    let x = rng.gen_range(0..coverage.width()) as i64;
    let y = rng.gen_range(0..coverage.height()) as i64;
    let w = rng.gen_range(settings.min_size..=settings.max_size) as i64;
    let h = rng.gen_range(settings.min_size..=settings.max_size) as i64;
    let shape = Rect::new(x, y, x + w, y + h);

    fill_ellipse(canvas, shape, settings.color.to_rgba());
    fill_ellipse(coverage, shape.pad(MASK_EDGE_SIZE), Luma([0]));
}

/// Fills solid shapes on an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillShapes {
    /// The image to process
    pub image: String,
    /// Optional mask limiting the area
    pub mask: Option<String>,
    /// Offset of the mask on the X axis of the image
    pub mask_x: i64,
    /// Offset of the mask on the Y axis of the image
    pub mask_y: i64,
    pub settings: ShapeSettings,
}

impl FillShapes {
    pub fn new(image: &str) -> Self {
        FillShapes {
            image: image.to_string(),
            mask: None,
            mask_x: 0,
            mask_y: 0,
            settings: ShapeSettings::default(),
        }
    }
}

impl Invocation for FillShapes {
    type Output = MaskedCropOutput;

    const INFO: NodeInfo = NodeInfo {
        id: "fill_shapes",
        title: "Fill Shapes",
        tags: &["image", "inpaint"],
        category: "inpaint",
        version: "1.0.1",
        use_cache: false,
    };

    fn invoke(&self, context: &mut InvocationContext<'_>) -> MaskKitResult<MaskedCropOutput> {
        let image = context.get_rgba(&self.image)?;
        let mask = match &self.mask {
            Some(name) => Some(context.get_mask(name)?),
            None => None,
        };

        let limit = mask.as_ref().map(|m| (m, (self.mask_x, self.mask_y)));
        let crop = fill_shapes(&image, limit, &self.settings, context.rng())?;
        info!("Filled {} shapes, result at {}", self.settings.num_shapes, crop.rect);
        context.save_crop(crop)
    }
}
