//! Invocation plumbing shared by the nodes

use image::{DynamicImage, GrayImage, RgbaImage};
use log::debug;
use rand::RngCore;

use crate::errors::MaskKitResult;
use crate::geometry::Rect;
use crate::store::{ImageCategory, ImageRef, ImageStore, Metadata};

/// Registration details of a node type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo {
    /// Type identifier
    pub id: &'static str,
    /// Human readable title
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
    pub version: &'static str,
    /// Whether a host may cache the node's output for identical inputs
    pub use_cache: bool,
}

/// A node the host can invoke
pub trait Invocation {
    /// Value the node produces
    type Output;

    /// Registration details of the node type
    const INFO: NodeInfo;

    /// Run the node against a context
    fn invoke(&self, context: &mut InvocationContext<'_>) -> MaskKitResult<Self::Output>;
}

/// Capabilities handed to a node for one invocation
pub struct InvocationContext<'a> {
    store: &'a mut dyn ImageStore,
    rng: &'a mut dyn RngCore,
}

impl<'a> InvocationContext<'a> {
    pub fn new(store: &'a mut dyn ImageStore, rng: &'a mut dyn RngCore) -> Self {
        InvocationContext { store, rng }
    }

    /// Random source for nodes that place things randomly
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Fetch an image converted to RGBA
    pub fn get_rgba(&self, name: &str) -> MaskKitResult<RgbaImage> {
        Ok(self.store.get_image(name)?.to_rgba8())
    }

    /// Fetch an image converted to a single-channel mask
    pub fn get_mask(&self, name: &str) -> MaskKitResult<GrayImage> {
        Ok(self.store.get_image(name)?.to_luma8())
    }

    pub fn save_rgba(&mut self, image: RgbaImage) -> MaskKitResult<ImageRef> {
        self.store.save_image(DynamicImage::ImageRgba8(image), ImageCategory::General)
    }

    pub fn save_mask(&mut self, mask: GrayImage, category: ImageCategory) -> MaskKitResult<ImageRef> {
        self.store.save_image(DynamicImage::ImageLuma8(mask), category)
    }

    pub fn get_metadata(&self, name: &str) -> MaskKitResult<Option<Metadata>> {
        self.store.get_metadata(name)
    }

    pub fn board_image_names(&self, board_id: &str) -> MaskKitResult<Vec<String>> {
        self.store.board_image_names(board_id)
    }

    /// Save a cropped image/mask pair and describe it
    pub fn save_crop(&mut self, crop: MaskedCrop) -> MaskKitResult<MaskedCropOutput> {
        debug!("Saving crop at {}", crop.rect);
        let image = self.save_rgba(crop.image)?;
        let mask = self.save_mask(crop.mask, ImageCategory::Mask)?;
        Ok(MaskedCropOutput {
            image,
            mask,
            x: crop.rect.left,
            y: crop.rect.top,
        })
    }
}

/// An image and mask cropped to the same region
#[derive(Debug, Clone)]
pub struct MaskedCrop {
    pub image: RgbaImage,
    pub mask: GrayImage,
    /// Region of the source image the crop covers
    pub rect: Rect,
}

/// Stored result of a cropping node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedCropOutput {
    /// The cropped image
    pub image: ImageRef,
    /// The cropped mask
    pub mask: ImageRef,
    /// X coordinate of the crop's left side in the source image
    pub x: i64,
    /// Y coordinate of the crop's top side in the source image
    pub y: i64,
}
