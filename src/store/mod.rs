//! Image storage seam
//!
//! Nodes never touch files directly. They fetch and persist rasters,
//! metadata and board listings through the [`ImageStore`] trait, which a
//! host application implements. Two stores ship with the crate: an
//! in-memory one and one backed by a directory tree.

mod memory;
mod directory;
mod tests;

use std::fmt;

use image::DynamicImage;

use crate::errors::MaskKitResult;

pub use self::memory::MemoryStore;
pub use self::directory::DirectoryStore;

/// Metadata record attached to an image
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Board id that stands for "not on any board"
pub const NO_BOARD: &str = "none";

/// Kind of image being saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    /// Regular output image
    General,
    /// Mask output
    Mask,
}

impl ImageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCategory::General => "general",
            ImageCategory::Mask => "mask",
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an image held by a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Name the store knows the image by
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageRef {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        ImageRef { name: name.into(), width, height }
    }
}

/// Operations a host provides to the nodes
pub trait ImageStore {
    /// Fetch a raster by name
    ///
    /// # Returns
    /// The decoded image or `ImageNotFound`
    fn get_image(&self, name: &str) -> MaskKitResult<DynamicImage>;

    /// Persist a raster and obtain a new reference to it
    fn save_image(&mut self, image: DynamicImage, category: ImageCategory) -> MaskKitResult<ImageRef>;

    /// Fetch the metadata record of an image, `None` when it has none
    fn get_metadata(&self, name: &str) -> MaskKitResult<Option<Metadata>>;

    /// List the names of the images on a board
    ///
    /// The board id [`NO_BOARD`] lists images that are not on any board.
    fn board_image_names(&self, board_id: &str) -> MaskKitResult<Vec<String>>;
}
