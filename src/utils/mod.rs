//! Utility modules for common functionality
//!
//! This module provides raster helpers, color parsing, node defaults,
//! logging and progress reporting used throughout the application.

pub mod logger;
pub mod progress;
pub mod mask_utils;
pub mod color_utils;
pub mod node_defaults;
mod tests;
