//! Scale image dimensions onto the multiple-of-8 grid

use log::debug;

use crate::errors::MaskKitResult;
use super::context::{Invocation, InvocationContext, NodeInfo};

/// How the scale factor is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleMode {
    /// Scale so the larger side becomes this many pixels
    ScaleTo(u32),
    /// Scale both sides by this factor
    Factor(f64),
}

/// Result of a size calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSize {
    /// The scaled width (in pixels)
    pub width: u32,
    /// The scaled height (in pixels)
    pub height: u32,
    /// The computed factor, only reported for [`ScaleMode::ScaleTo`]
    pub scale_factor: Option<f64>,
}

/// Calculate a scaled size whose sides are multiples of 8
///
/// Both sides are multiplied by the factor, truncated, then rounded down to
/// a multiple of 8.
///
/// # Panics
/// With [`ScaleMode::ScaleTo`] when both sides are zero.
pub fn scale_size(width: u32, height: u32, mode: ScaleMode) -> ScaledSize {
    let (factor, reported) = match mode {
        ScaleMode::ScaleTo(target) => {
            let longest = width.max(height);
            assert!(longest > 0, "cannot scale a size whose larger side is zero");
            let factor = target as f64 / longest as f64;
            (factor, Some(factor))
        }
        ScaleMode::Factor(factor) => (factor, None),
    };

    let scaled = |side: u32| -> u32 {
        let truncated = (side as f64 * factor) as u32;
        (truncated / 8) * 8
    };

    let size = ScaledSize {
        width: scaled(width),
        height: scaled(height),
        scale_factor: reported,
    };
    debug!("Scaled {}x{} by {} to {}x{}", width, height, factor, size.width, size.height);
    size
}

/// Calculates the scaling size, ensuring it is a multiple of 8 pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeScale {
    /// Source image width
    pub width: u32,
    /// Source image height
    pub height: u32,
    pub mode: ScaleMode,
}

impl Default for SizeScale {
    fn default() -> Self {
        SizeScale {
            width: 512,
            height: 512,
            mode: ScaleMode::ScaleTo(768),
        }
    }
}

impl Invocation for SizeScale {
    type Output = ScaledSize;

    const INFO: NodeInfo = NodeInfo {
        id: "size_scale",
        title: "Size Scale",
        tags: &["math"],
        category: "math",
        version: "1.0.0",
        use_cache: true,
    };

    fn invoke(&self, _context: &mut InvocationContext<'_>) -> MaskKitResult<ScaledSize> {
        Ok(scale_size(self.width, self.height, self.mode))
    }
}
