//! Node default values
//!
//! Built-in defaults are embedded from `defaults.toml` and parsed once.
//! A user file with the same layout can override any subset of them.

use std::fs;

use lazy_static::lazy_static;
use log::{debug, warn};

use crate::errors::{MaskKitError, MaskKitResult};
use crate::utils::color_utils::Color;

lazy_static! {
    static ref BUILTIN_DEFAULTS: NodeDefaults = {
        let content = include_str!("../../defaults.toml");
        NodeDefaults::default().merge_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in node defaults: {}", e);
            NodeDefaults::default()
        })
    };
}

/// Default inputs for every node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDefaults {
    pub mask_box_padding: u32,
    pub fill_num_shapes: u32,
    pub fill_min_size: u32,
    pub fill_max_size: u32,
    pub fill_padding: u32,
    pub fill_color: Color,
    pub scale_width: u32,
    pub scale_height: u32,
    pub scale_to: u32,
    pub transpose_batches: usize,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        NodeDefaults {
            mask_box_padding: 50,
            fill_num_shapes: 3,
            fill_min_size: 5,
            fill_max_size: 20,
            fill_padding: 50,
            fill_color: Color::default(),
            scale_width: 512,
            scale_height: 512,
            scale_to: 768,
            transpose_batches: 2,
        }
    }
}

impl NodeDefaults {
    /// Defaults shipped with the crate
    pub fn builtin() -> Self {
        BUILTIN_DEFAULTS.clone()
    }

    /// Built-in defaults overridden by the values in a TOML file
    pub fn from_file(path: &str) -> MaskKitResult<Self> {
        let content = fs::read_to_string(path)?;
        debug!("Loading node defaults from {}", path);
        Self::builtin().merge_str(&content)
    }

    /// Apply the values present in a TOML document on top of `self`
    pub fn merge_str(mut self, content: &str) -> MaskKitResult<Self> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| MaskKitError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        read_u32(&value, "mask_box", "padding", &mut self.mask_box_padding)?;

        read_u32(&value, "fill_shapes", "num_shapes", &mut self.fill_num_shapes)?;
        read_u32(&value, "fill_shapes", "min_size", &mut self.fill_min_size)?;
        read_u32(&value, "fill_shapes", "max_size", &mut self.fill_max_size)?;
        read_u32(&value, "fill_shapes", "padding", &mut self.fill_padding)?;
        if let Some(color) = lookup(&value, "fill_shapes", "color") {
            let color = color.as_str().ok_or_else(|| {
                MaskKitError::ConfigError("fill_shapes.color must be a string".to_string())
            })?;
            self.fill_color = color.parse()?;
        }

        read_u32(&value, "size_scale", "width", &mut self.scale_width)?;
        read_u32(&value, "size_scale", "height", &mut self.scale_height)?;
        read_u32(&value, "size_scale", "scale_to", &mut self.scale_to)?;

        let mut batches = self.transpose_batches as u32;
        read_u32(&value, "transpose_images", "batches", &mut batches)?;
        self.transpose_batches = batches as usize;

        self.validate()?;
        Ok(self)
    }

    /// Check the same lower bounds the command line enforces
    fn validate(&self) -> MaskKitResult<()> {
        at_least("fill_shapes", "min_size", self.fill_min_size, 3)?;
        at_least("fill_shapes", "max_size", self.fill_max_size, 5)?;
        at_least("size_scale", "width", self.scale_width, 8)?;
        at_least("size_scale", "height", self.scale_height, 8)?;
        at_least("size_scale", "scale_to", self.scale_to, 128)?;
        at_least("transpose_images", "batches", self.transpose_batches as u32, 1)?;
        Ok(())
    }
}

fn at_least(table: &str, key: &str, value: u32, minimum: u32) -> MaskKitResult<()> {
    if value < minimum {
        return Err(MaskKitError::ConfigError(format!(
            "{}.{} must be at least {}, got {}",
            table, key, minimum, value
        )));
    }
    Ok(())
}

fn lookup<'v>(value: &'v toml::Value, table: &str, key: &str) -> Option<&'v toml::Value> {
    value.get(table).and_then(|t| t.as_table()).and_then(|t| t.get(key))
}

fn read_u32(value: &toml::Value, table: &str, key: &str, target: &mut u32) -> MaskKitResult<()> {
    if let Some(entry) = lookup(value, table, key) {
        let number = entry
            .as_integer()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                MaskKitError::ConfigError(format!("{}.{} must be a non-negative integer", table, key))
            })?;
        *target = number;
    }
    Ok(())
}
