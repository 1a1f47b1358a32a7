//! Invert a mask

use log::info;

use crate::errors::MaskKitResult;
use crate::store::{ImageCategory, ImageRef};
use crate::utils::mask_utils::invert_mask;
use super::context::{Invocation, InvocationContext, NodeInfo};

/// Invert the image mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskInvert {
    /// The mask image to process
    pub image: String,
}

impl MaskInvert {
    pub fn new(image: &str) -> Self {
        MaskInvert { image: image.to_string() }
    }
}

impl Invocation for MaskInvert {
    type Output = ImageRef;

    const INFO: NodeInfo = NodeInfo {
        id: "mask_invert",
        title: "Mask Invert",
        tags: &["image", "inpaint"],
        category: "inpaint",
        version: "1.0.0",
        use_cache: true,
    };

    fn invoke(&self, context: &mut InvocationContext<'_>) -> MaskKitResult<ImageRef> {
        let mask = context.get_mask(&self.image)?;
        let inverted = invert_mask(&mask);
        let saved = context.save_mask(inverted, ImageCategory::General)?;
        info!("Inverted {} into {}", self.image, saved.name);
        Ok(saved)
    }
}
