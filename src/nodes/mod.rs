//! Node implementations
//!
//! Each node is a struct of typed inputs implementing [`Invocation`]. The
//! raster work of every node is also exposed as a plain function so it can
//! be used without an image store.

pub mod context;
pub mod mask_box;
pub mod fill_shapes;
pub mod mask_invert;
pub mod size_scale;
pub mod transpose_images;
pub mod image_metadata;
pub mod images_in_gallery;
mod tests;

pub use context::{Invocation, InvocationContext, MaskedCrop, MaskedCropOutput, NodeInfo};
pub use mask_box::{crop_to_mask_box, MaskBox};
pub use fill_shapes::{fill_shapes, FillShapes, ShapeSettings};
pub use mask_invert::MaskInvert;
pub use size_scale::{scale_size, ScaleMode, ScaledSize, SizeScale};
pub use transpose_images::{transpose, TransposeImages};
pub use image_metadata::ImageMetadata;
pub use images_in_gallery::ImagesInGallery;

/// Descriptions of every node in the crate
pub fn registry() -> Vec<NodeInfo> {
    vec![
        MaskBox::INFO,
        FillShapes::INFO,
        MaskInvert::INFO,
        SizeScale::INFO,
        TransposeImages::INFO,
        ImageMetadata::INFO,
        ImagesInGallery::INFO,
    ]
}
