//! Custom error types for node processing

use std::fmt;
use std::io;

use crate::geometry::Rect;

/// Errors raised while running a node or talking to an image store
#[derive(Debug)]
pub enum MaskKitError {
    /// I/O error
    IoError(io::Error),
    /// Image decode/encode error
    ImageError(image::ImageError),
    /// Metadata record could not be read or written
    MetadataError(serde_json::Error),
    /// No image with this name exists in the store
    ImageNotFound(String),
    /// No board with this id exists in the store
    BoardNotFound(String),
    /// A crop or draw region has no area left
    EmptyRegion(Rect),
    /// Color string could not be parsed
    InvalidColor(String),
    /// Node defaults could not be loaded
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for MaskKitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskKitError::IoError(e) => write!(f, "I/O error: {}", e),
            MaskKitError::ImageError(e) => write!(f, "Image error: {}", e),
            MaskKitError::MetadataError(e) => write!(f, "Metadata error: {}", e),
            MaskKitError::ImageNotFound(name) => write!(f, "Image not found: {}", name),
            MaskKitError::BoardNotFound(id) => write!(f, "Board not found: {}", id),
            MaskKitError::EmptyRegion(rect) => write!(f, "Region has no area: {}", rect),
            MaskKitError::InvalidColor(s) => write!(f, "Invalid color: {}", s),
            MaskKitError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            MaskKitError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for MaskKitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaskKitError::IoError(e) => Some(e),
            MaskKitError::ImageError(e) => Some(e),
            MaskKitError::MetadataError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MaskKitError {
    fn from(error: io::Error) -> Self {
        MaskKitError::IoError(error)
    }
}

impl From<image::ImageError> for MaskKitError {
    fn from(error: image::ImageError) -> Self {
        MaskKitError::ImageError(error)
    }
}

impl From<serde_json::Error> for MaskKitError {
    fn from(error: serde_json::Error) -> Self {
        MaskKitError::MetadataError(error)
    }
}

/// Result type for node operations
pub type MaskKitResult<T> = Result<T, MaskKitError>;
