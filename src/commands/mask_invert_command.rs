//! Mask inversion command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{MaskKitError, MaskKitResult};
use crate::store::DirectoryStore;
use crate::utils::progress::ProgressTracker;
use crate::MaskKit;

/// Command for inverting one or more masks
pub struct MaskInvertCommand {
    kit: MaskKit<DirectoryStore>,
    images: Vec<String>,
}

impl MaskInvertCommand {
    pub fn new(args: &ArgMatches, kit: MaskKit<DirectoryStore>) -> MaskKitResult<Self> {
        let images: Vec<String> = args
            .get_many::<String>("images")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        if images.is_empty() {
            return Err(MaskKitError::GenericError("No masks to invert".to_string()));
        }
        Ok(MaskInvertCommand { kit, images })
    }
}

impl Command for MaskInvertCommand {
    fn execute(&mut self) -> MaskKitResult<()> {
        let progress = if self.images.len() > 1 {
            ProgressTracker::new(self.images.len() as u64, "Inverting masks")
        } else {
            ProgressTracker::hidden()
        };

        for image in &self.images {
            progress.set_message(image);
            let output = self.kit.mask_invert(image)?;
            println!("{} -> {} ({}x{})", image, output.name, output.width, output.height);
            progress.increment(1);
        }
        progress.finish();

        info!("Inverted {} masks", self.images.len());
        Ok(())
    }
}
