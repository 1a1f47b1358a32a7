//! Image metadata command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::errors::{MaskKitError, MaskKitResult};
use crate::store::DirectoryStore;
use crate::MaskKit;

/// Command for printing the metadata record of an image as JSON
pub struct MetadataCommand {
    kit: MaskKit<DirectoryStore>,
    image: String,
}

impl MetadataCommand {
    pub fn new(args: &ArgMatches, kit: MaskKit<DirectoryStore>) -> MaskKitResult<Self> {
        let image = args.get_one::<String>("image")
            .ok_or_else(|| MaskKitError::GenericError("Missing image argument".to_string()))?
            .clone();
        Ok(MetadataCommand { kit, image })
    }
}

impl Command for MetadataCommand {
    fn execute(&mut self) -> MaskKitResult<()> {
        let metadata = self.kit.image_metadata(&self.image)?;
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        Ok(())
    }
}
