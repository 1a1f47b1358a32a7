//! Size scaling command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::errors::MaskKitResult;
use crate::nodes::ScaleMode;
use crate::store::DirectoryStore;
use crate::MaskKit;

/// Command for computing a multiple-of-8 scaled size
pub struct SizeScaleCommand {
    kit: MaskKit<DirectoryStore>,
    width: u32,
    height: u32,
    mode: ScaleMode,
}

impl SizeScaleCommand {
    pub fn new(args: &ArgMatches, kit: MaskKit<DirectoryStore>) -> MaskKitResult<Self> {
        let defaults = kit.defaults().clone();
        let width = args.get_one::<u32>("width").copied().unwrap_or(defaults.scale_width);
        let height = args.get_one::<u32>("height").copied().unwrap_or(defaults.scale_height);

        let mode = match args.get_one::<f64>("factor") {
            Some(factor) => ScaleMode::Factor(*factor),
            None => ScaleMode::ScaleTo(
                args.get_one::<u32>("scale-to").copied().unwrap_or(defaults.scale_to),
            ),
        };

        Ok(SizeScaleCommand { kit, width, height, mode })
    }
}

impl Command for SizeScaleCommand {
    fn execute(&mut self) -> MaskKitResult<()> {
        let size = self.kit.size_scale(self.width, self.height, self.mode)?;
        println!("width: {}", size.width);
        println!("height: {}", size.height);
        if let Some(factor) = size.scale_factor {
            println!("scale_factor: {}", factor);
        }
        Ok(())
    }
}
