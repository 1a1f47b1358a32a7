//! Directory-backed image store
//!
//! Layout under the root directory:
//! - images are files, named by their path relative to the root
//! - metadata is a JSON sidecar next to the image, `<name>.json`
//! - a board is a sub-directory; the `none` board is the root itself
//! - saved images are written as `<category>_<n>.png` in the root

use std::fs;
use std::path::{Component, Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use log::{debug, info};

use crate::errors::{MaskKitError, MaskKitResult};
use super::{ImageCategory, ImageRef, ImageStore, Metadata, NO_BOARD};

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff"];

/// Image store rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Open a store rooted at an existing directory
    pub fn new(root: impl AsRef<Path>) -> MaskKitResult<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(MaskKitError::GenericError(format!(
                "Store root is not a directory: {}",
                root.display()
            )));
        }
        Ok(DirectoryStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an image inside the store
    ///
    /// Names are relative to the root; absolute names and `..` components
    /// are rejected so no lookup leaves the store.
    pub fn image_path(&self, name: &str) -> MaskKitResult<PathBuf> {
        let relative = Path::new(name);
        let inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !inside {
            return Err(MaskKitError::GenericError(format!(
                "Name points outside the store: {}",
                name
            )));
        }
        Ok(self.root.join(relative))
    }

    fn metadata_path(&self, name: &str) -> MaskKitResult<PathBuf> {
        self.image_path(&format!("{}.json", name))
    }

    /// Write the metadata sidecar of an image
    pub fn insert_metadata(&self, name: &str, metadata: &Metadata) -> MaskKitResult<()> {
        let content = serde_json::to_string_pretty(metadata)?;
        fs::write(self.metadata_path(name)?, content)?;
        Ok(())
    }

    fn next_free_name(&self, category: ImageCategory) -> String {
        let mut n = 1u32;
        loop {
            let name = format!("{}_{:05}.png", category, n);
            if !self.root.join(&name).exists() {
                return name;
            }
            n += 1;
        }
    }
}

fn is_image_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
}

impl ImageStore for DirectoryStore {
    fn get_image(&self, name: &str) -> MaskKitResult<DynamicImage> {
        let path = self.image_path(name)?;
        if !path.is_file() {
            return Err(MaskKitError::ImageNotFound(name.to_string()));
        }
        debug!("Reading image {}", path.display());
        Ok(image::open(&path)?)
    }

    fn save_image(&mut self, image: DynamicImage, category: ImageCategory) -> MaskKitResult<ImageRef> {
        let name = self.next_free_name(category);
        let path = self.root.join(&name);
        image.save_with_format(&path, ImageFormat::Png)?;
        info!("Saved {}x{} {} image to {}", image.width(), image.height(), category, path.display());
        Ok(ImageRef::new(name, image.width(), image.height()))
    }

    fn get_metadata(&self, name: &str) -> MaskKitResult<Option<Metadata>> {
        if !self.image_path(name)?.is_file() {
            return Err(MaskKitError::ImageNotFound(name.to_string()));
        }

        let path = self.metadata_path(name)?;
        if !path.is_file() {
            debug!("No metadata sidecar for {}", name);
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let metadata: Metadata = serde_json::from_str(&content)?;
        Ok(Some(metadata))
    }

    fn board_image_names(&self, board_id: &str) -> MaskKitResult<Vec<String>> {
        let dir = if board_id == NO_BOARD {
            self.root.clone()
        } else {
            self.image_path(board_id)?
        };
        if !dir.is_dir() {
            return Err(MaskKitError::BoardNotFound(board_id.to_string()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if !is_image_file(&path) {
                continue;
            }
            if let Ok(relative) = path.strip_prefix(&self.root) {
                names.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        names.sort();
        Ok(names)
    }
}
