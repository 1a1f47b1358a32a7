//! Rectangle and mask geometry
//!
//! This module provides the rectangle value type shared by every node and
//! the scan that finds the bounding box of a mask's active pixels.

mod rect;
mod mask_bounds;
mod tests;

pub use self::rect::Rect;
pub use self::mask_bounds::{calc_min_mask_box, is_active, ACTIVE_THRESHOLD};
