//! Read the metadata of an image

use log::debug;

use crate::errors::MaskKitResult;
use crate::store::Metadata;
use super::context::{Invocation, InvocationContext, NodeInfo};

/// Get the metadata of an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    /// The image to get metadata for
    pub image: String,
}

impl ImageMetadata {
    pub fn new(image: &str) -> Self {
        ImageMetadata { image: image.to_string() }
    }
}

impl Invocation for ImageMetadata {
    type Output = Metadata;

    const INFO: NodeInfo = NodeInfo {
        id: "image_metadata",
        title: "Image Metadata",
        tags: &["image", "metadata"],
        category: "primitives",
        version: "1.0.0",
        use_cache: true,
    };

    fn invoke(&self, context: &mut InvocationContext<'_>) -> MaskKitResult<Metadata> {
        match context.get_metadata(&self.image)? {
            Some(metadata) => Ok(metadata),
            None => {
                debug!("{} has no metadata, returning an empty record", self.image);
                Ok(Metadata::new())
            }
        }
    }
}
