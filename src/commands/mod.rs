//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern. Every command runs one
//! node against a directory store.

pub mod command_traits;
pub mod cli;
pub mod crop_commands;
pub mod mask_invert_command;
pub mod size_scale_command;
pub mod collection_commands;
pub mod metadata_command;
mod tests;

pub use command_traits::{Command, CommandFactory};
pub use cli::build_cli;
pub use crop_commands::{FillShapesCommand, MaskBoxCommand};
pub use mask_invert_command::MaskInvertCommand;
pub use size_scale_command::SizeScaleCommand;
pub use collection_commands::{GalleryCommand, TransposeCommand};
pub use metadata_command::MetadataCommand;

use clap::ArgMatches;
use log::debug;

use crate::errors::{MaskKitError, MaskKitResult};
use crate::nodes::registry;
use crate::store::DirectoryStore;
use crate::utils::node_defaults::NodeDefaults;
use crate::MaskKit;

/// Command printing the available nodes
pub struct ListNodesCommand;

impl Command for ListNodesCommand {
    fn execute(&mut self) -> MaskKitResult<()> {
        for info in registry() {
            println!(
                "{:<18} {:<18} v{:<6} {} [{}]",
                info.id,
                info.title,
                info.version,
                info.category,
                info.tags.join(", ")
            );
        }
        Ok(())
    }
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct MaskkitCommandFactory;

impl MaskkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        MaskkitCommandFactory
    }

    /// Open the store and defaults named by the global arguments
    fn open_kit(&self, args: &ArgMatches) -> MaskKitResult<MaskKit<DirectoryStore>> {
        let root = args.get_one::<String>("store").map(String::as_str).unwrap_or(".");
        let store = DirectoryStore::new(root)?;

        let defaults = match args.get_one::<String>("config") {
            Some(path) => NodeDefaults::from_file(path)?,
            None => NodeDefaults::builtin(),
        };
        debug!("Using store {} with defaults {:?}", root, defaults);

        let kit = match args.try_get_one::<u64>("seed").ok().flatten() {
            Some(seed) => MaskKit::with_seed(store, *seed),
            None => MaskKit::new(store),
        };
        Ok(kit.with_defaults(defaults))
    }
}

impl Default for MaskkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for MaskkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> MaskKitResult<Box<dyn Command>> {
        let (name, sub_args) = args
            .subcommand()
            .ok_or_else(|| MaskKitError::GenericError("No command given".to_string()))?;

        if name == "nodes" {
            return Ok(Box::new(ListNodesCommand));
        }

        let kit = self.open_kit(sub_args)?;
        match name {
            "mask-box" => Ok(Box::new(MaskBoxCommand::new(sub_args, kit)?)),
            "fill-shapes" => Ok(Box::new(FillShapesCommand::new(sub_args, kit)?)),
            "mask-invert" => Ok(Box::new(MaskInvertCommand::new(sub_args, kit)?)),
            "size-scale" => Ok(Box::new(SizeScaleCommand::new(sub_args, kit)?)),
            "transpose" => Ok(Box::new(TransposeCommand::new(sub_args, kit)?)),
            "metadata" => Ok(Box::new(MetadataCommand::new(sub_args, kit)?)),
            "gallery" => Ok(Box::new(GalleryCommand::new(sub_args, kit)?)),
            other => Err(MaskKitError::GenericError(format!("Unknown command: {}", other))),
        }
    }
}
