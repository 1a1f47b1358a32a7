//! List the images on a board

use log::info;

use crate::errors::MaskKitResult;
use crate::store::NO_BOARD;
use super::context::{Invocation, InvocationContext, NodeInfo};

/// Collect all images on the selected board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagesInGallery {
    /// Board to list, `None` for images on no board
    pub board_id: Option<String>,
}

impl ImagesInGallery {
    pub fn new(board_id: Option<&str>) -> Self {
        ImagesInGallery { board_id: board_id.map(str::to_string) }
    }
}

impl Invocation for ImagesInGallery {
    type Output = Vec<String>;

    const INFO: NodeInfo = NodeInfo {
        id: "images_in_gallery",
        title: "Images In Gallery",
        tags: &["primitives", "image", "collection", "gallery"],
        category: "primitives",
        version: "1.0.0",
        use_cache: false,
    };

    fn invoke(&self, context: &mut InvocationContext<'_>) -> MaskKitResult<Vec<String>> {
        let board_id = self.board_id.as_deref().unwrap_or(NO_BOARD);
        let names = context.board_image_names(board_id)?;
        info!("Board {} holds {} images", board_id, names.len());
        Ok(names)
    }
}
