pub mod errors;
pub mod geometry;
pub mod store;
pub mod nodes;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::MaskKit;

pub use errors::{MaskKitError, MaskKitResult};
pub use geometry::{calc_min_mask_box, Rect};
pub use store::{DirectoryStore, ImageCategory, ImageRef, ImageStore, MemoryStore, Metadata};
pub use nodes::{Invocation, InvocationContext};
