use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::MaskKitResult;
use crate::nodes::{
    FillShapes, ImageMetadata, ImagesInGallery, Invocation, InvocationContext, MaskBox,
    MaskInvert, MaskedCropOutput, ScaleMode, ScaledSize, ShapeSettings, SizeScale,
    TransposeImages,
};
use crate::store::{ImageRef, ImageStore, Metadata};
use crate::utils::node_defaults::NodeDefaults;

/// Main interface to the MaskKit library
///
/// Owns an image store and a random source and runs nodes against them,
/// filling omitted inputs from the node defaults.
pub struct MaskKit<S: ImageStore> {
    store: S,
    rng: StdRng,
    defaults: NodeDefaults,
}

impl<S: ImageStore> MaskKit<S> {
    /// Create a MaskKit instance with built-in defaults and an entropy-seeded rng
    pub fn new(store: S) -> Self {
        MaskKit {
            store,
            rng: StdRng::from_entropy(),
            defaults: NodeDefaults::builtin(),
        }
    }

    /// Create a MaskKit instance whose random shape placement is reproducible
    pub fn with_seed(store: S, seed: u64) -> Self {
        MaskKit {
            store,
            rng: StdRng::seed_from_u64(seed),
            defaults: NodeDefaults::builtin(),
        }
    }

    /// Replace the node defaults
    pub fn with_defaults(mut self, defaults: NodeDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &NodeDefaults {
        &self.defaults
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Run any node against the owned store
    pub fn run<N: Invocation>(&mut self, node: &N) -> MaskKitResult<N::Output> {
        info!("Invoking node {}", N::INFO.id);
        let mut context = InvocationContext::new(&mut self.store, &mut self.rng);
        node.invoke(&mut context)
    }

    /// Shape settings built from the node defaults
    pub fn shape_settings(&self) -> ShapeSettings {
        ShapeSettings {
            num_shapes: self.defaults.fill_num_shapes,
            min_size: self.defaults.fill_min_size,
            max_size: self.defaults.fill_max_size,
            color: self.defaults.fill_color,
            padding: self.defaults.fill_padding,
        }
    }

    /// Crop an image and mask to the padded box around the mask
    ///
    /// # Arguments
    /// * `image` - Name of the image in the store
    /// * `mask` - Name of the mask in the store
    /// * `mask_offset` - Position of the mask on the image
    /// * `padding` - Padding around the box, the default when `None`
    pub fn mask_box(
        &mut self,
        image: &str,
        mask: &str,
        mask_offset: (i64, i64),
        padding: Option<u32>,
    ) -> MaskKitResult<MaskedCropOutput> {
        let node = MaskBox {
            image: image.to_string(),
            mask: mask.to_string(),
            mask_x: mask_offset.0,
            mask_y: mask_offset.1,
            padding: padding.unwrap_or(self.defaults.mask_box_padding),
        };
        self.run(&node)
    }

    /// Draw random shapes onto an image, optionally limited by a mask
    ///
    /// # Arguments
    /// * `image` - Name of the image in the store
    /// * `mask` - Optional limiting mask name and its position on the image
    /// * `settings` - Shape settings, [`MaskKit::shape_settings`] when `None`
    pub fn fill_shapes(
        &mut self,
        image: &str,
        mask: Option<(&str, (i64, i64))>,
        settings: Option<ShapeSettings>,
    ) -> MaskKitResult<MaskedCropOutput> {
        let (mask, (mask_x, mask_y)) = match mask {
            Some((name, offset)) => (Some(name.to_string()), offset),
            None => (None, (0, 0)),
        };
        let node = FillShapes {
            image: image.to_string(),
            mask,
            mask_x,
            mask_y,
            settings: settings.unwrap_or_else(|| self.shape_settings()),
        };
        self.run(&node)
    }

    /// Invert a mask and store the result
    pub fn mask_invert(&mut self, mask: &str) -> MaskKitResult<ImageRef> {
        self.run(&MaskInvert::new(mask))
    }

    /// Scale dimensions onto the multiple-of-8 grid
    pub fn size_scale(&mut self, width: u32, height: u32, mode: ScaleMode) -> MaskKitResult<ScaledSize> {
        self.run(&SizeScale { width, height, mode })
    }

    /// Reorder a row-major list of image names into column-major order
    pub fn transpose_images(&mut self, names: Vec<String>, batches: Option<usize>) -> MaskKitResult<Vec<String>> {
        let batches = batches.unwrap_or(self.defaults.transpose_batches);
        self.run(&TransposeImages::new(names, batches))
    }

    /// Metadata record of an image, empty when it has none
    pub fn image_metadata(&mut self, image: &str) -> MaskKitResult<Metadata> {
        self.run(&ImageMetadata::new(image))
    }

    /// Names of the images on a board, or on no board for `None`
    pub fn images_in_gallery(&mut self, board_id: Option<&str>) -> MaskKitResult<Vec<String>> {
        self.run(&ImagesInGallery::new(board_id))
    }
}
