//! In-memory image store

use std::collections::{BTreeMap, HashMap};

use image::DynamicImage;
use log::debug;

use crate::errors::{MaskKitError, MaskKitResult};
use super::{ImageCategory, ImageRef, ImageStore, Metadata, NO_BOARD};

/// Image store that keeps everything in memory
///
/// Useful for embedding the nodes in another program and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    images: BTreeMap<String, DynamicImage>,
    metadata: HashMap<String, Metadata>,
    boards: HashMap<String, Vec<String>>,
    saved: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Add or replace an image under a given name
    pub fn insert_image(&mut self, name: &str, image: DynamicImage) -> ImageRef {
        let image_ref = ImageRef::new(name, image.width(), image.height());
        self.images.insert(name.to_string(), image);
        image_ref
    }

    /// Attach a metadata record to an image name
    pub fn insert_metadata(&mut self, name: &str, metadata: Metadata) {
        self.metadata.insert(name.to_string(), metadata);
    }

    /// Put an image on a board, creating the board if needed
    pub fn add_to_board(&mut self, board_id: &str, name: &str) {
        self.boards
            .entry(board_id.to_string())
            .or_default()
            .push(name.to_string());
    }

    /// Number of images in the store
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageStore for MemoryStore {
    fn get_image(&self, name: &str) -> MaskKitResult<DynamicImage> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| MaskKitError::ImageNotFound(name.to_string()))
    }

    fn save_image(&mut self, image: DynamicImage, category: ImageCategory) -> MaskKitResult<ImageRef> {
        self.saved += 1;
        let name = format!("{}-{}", category, self.saved);
        debug!("Storing {}x{} image as {}", image.width(), image.height(), name);
        Ok(self.insert_image(&name, image))
    }

    fn get_metadata(&self, name: &str) -> MaskKitResult<Option<Metadata>> {
        if !self.images.contains_key(name) {
            return Err(MaskKitError::ImageNotFound(name.to_string()));
        }
        Ok(self.metadata.get(name).cloned())
    }

    fn board_image_names(&self, board_id: &str) -> MaskKitResult<Vec<String>> {
        if board_id == NO_BOARD {
            let names = self
                .images
                .keys()
                .filter(|name| !self.boards.values().any(|board| board.contains(*name)))
                .cloned()
                .collect();
            return Ok(names);
        }

        self.boards
            .get(board_id)
            .cloned()
            .ok_or_else(|| MaskKitError::BoardNotFound(board_id.to_string()))
    }
}
