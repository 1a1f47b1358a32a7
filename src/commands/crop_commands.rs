//! Commands for the cropping nodes
//!
//! Both commands print the stored image, the stored mask and the crop's
//! top-left offset in the source image.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{MaskKitError, MaskKitResult};
use crate::nodes::MaskedCropOutput;
use crate::store::DirectoryStore;
use crate::utils::color_utils::Color;
use crate::MaskKit;

fn print_crop(output: &MaskedCropOutput) {
    println!("image: {} ({}x{})", output.image.name, output.image.width, output.image.height);
    println!("mask: {} ({}x{})", output.mask.name, output.mask.width, output.mask.height);
    println!("x: {}", output.x);
    println!("y: {}", output.y);
}

fn required(args: &ArgMatches, name: &str) -> MaskKitResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| MaskKitError::GenericError(format!("Missing {} argument", name)))
}

fn mask_offset(args: &ArgMatches) -> (i64, i64) {
    let x = args.get_one::<i64>("mask-x").copied().unwrap_or(0);
    let y = args.get_one::<i64>("mask-y").copied().unwrap_or(0);
    (x, y)
}

/// Command for cropping an image to its mask box
pub struct MaskBoxCommand {
    kit: MaskKit<DirectoryStore>,
    image: String,
    mask: String,
    mask_offset: (i64, i64),
    padding: Option<u32>,
}

impl MaskBoxCommand {
    /// Create a new mask box command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `kit` - MaskKit instance over the store
    pub fn new(args: &ArgMatches, kit: MaskKit<DirectoryStore>) -> MaskKitResult<Self> {
        Ok(MaskBoxCommand {
            kit,
            image: required(args, "image")?,
            mask: required(args, "mask")?,
            mask_offset: mask_offset(args),
            padding: args.get_one::<u32>("padding").copied(),
        })
    }
}

impl Command for MaskBoxCommand {
    fn execute(&mut self) -> MaskKitResult<()> {
        info!("Cropping {} to the box of {}", self.image, self.mask);
        let output = self.kit.mask_box(&self.image, &self.mask, self.mask_offset, self.padding)?;
        print_crop(&output);
        Ok(())
    }
}

/// Command for filling random shapes onto an image
pub struct FillShapesCommand {
    kit: MaskKit<DirectoryStore>,
    image: String,
    mask: Option<String>,
    mask_offset: (i64, i64),
    num_shapes: Option<u32>,
    min_size: Option<u32>,
    max_size: Option<u32>,
    padding: Option<u32>,
    color: Option<Color>,
}

impl FillShapesCommand {
    /// Create a new fill shapes command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `kit` - MaskKit instance over the store
    pub fn new(args: &ArgMatches, kit: MaskKit<DirectoryStore>) -> MaskKitResult<Self> {
        Ok(FillShapesCommand {
            kit,
            image: required(args, "image")?,
            mask: args.get_one::<String>("mask").cloned(),
            mask_offset: mask_offset(args),
            num_shapes: args.get_one::<u32>("num-shapes").copied(),
            min_size: args.get_one::<u32>("min-size").copied(),
            max_size: args.get_one::<u32>("max-size").copied(),
            padding: args.get_one::<u32>("padding").copied(),
            color: args.get_one::<Color>("color").copied(),
        })
    }
}

impl Command for FillShapesCommand {
    fn execute(&mut self) -> MaskKitResult<()> {
        let mut settings = self.kit.shape_settings();
        if let Some(n) = self.num_shapes {
            settings.num_shapes = n;
        }
        if let Some(size) = self.min_size {
            settings.min_size = size;
        }
        if let Some(size) = self.max_size {
            settings.max_size = size;
        }
        if let Some(padding) = self.padding {
            settings.padding = padding;
        }
        if let Some(color) = self.color {
            settings.color = color;
        }

        info!("Filling {} shapes of {} onto {}", settings.num_shapes, settings.color, self.image);
        let mask = self.mask.as_deref().map(|name| (name, self.mask_offset));
        let output = self.kit.fill_shapes(&self.image, mask, Some(settings))?;
        print_crop(&output);
        Ok(())
    }
}
