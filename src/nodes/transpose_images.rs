//! Reorder a row-major image grid into column-major order

use log::debug;

use crate::errors::MaskKitResult;
use super::context::{Invocation, InvocationContext, NodeInfo};

/// Transpose a flat row-major grid with `columns` columns
///
/// With 2 columns, `[1,2,3,4,5,6]` holds the rows `[1,2] [3,4] [5,6]` and
/// becomes `[1,3,5,2,4,6]`. The grid has `len / columns` full rows; items
/// of a trailing partial row are dropped.
///
/// # Panics
/// When `columns` is zero.
pub fn transpose<T: Clone>(items: &[T], columns: usize) -> Vec<T> {
    let rows = items.len() / columns;
    let mut transposed = Vec::with_capacity(rows * columns);
    for column in 0..columns {
        for row in 0..rows {
            transposed.push(items[row * columns + column].clone());
        }
    }
    transposed
}

/// Transpose a collection of images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransposeImages {
    /// Names of the images, row by row
    pub collection: Vec<String>,
    /// Number of images per row
    pub batches: usize,
}

impl TransposeImages {
    pub fn new(collection: Vec<String>, batches: usize) -> Self {
        TransposeImages { collection, batches }
    }
}

impl Invocation for TransposeImages {
    type Output = Vec<String>;

    const INFO: NodeInfo = NodeInfo {
        id: "transpose_images",
        title: "Transpose Images",
        tags: &["image", "collection"],
        category: "collections",
        version: "1.0.0",
        use_cache: false,
    };

    fn invoke(&self, _context: &mut InvocationContext<'_>) -> MaskKitResult<Vec<String>> {
        let transposed = transpose(&self.collection, self.batches);
        if transposed.len() < self.collection.len() {
            debug!(
                "Dropped {} images past the last full row",
                self.collection.len() - transposed.len()
            );
        }
        Ok(transposed)
    }
}
