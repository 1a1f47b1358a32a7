//! Commands working on collections of images

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::errors::MaskKitResult;
use crate::store::DirectoryStore;
use crate::MaskKit;

/// Where the transpose command gets its images from
enum ImageSource {
    Names(Vec<String>),
    Board(String),
}

/// Command for transposing a grid of images
pub struct TransposeCommand {
    kit: MaskKit<DirectoryStore>,
    source: ImageSource,
    batches: Option<usize>,
}

impl TransposeCommand {
    pub fn new(args: &ArgMatches, kit: MaskKit<DirectoryStore>) -> MaskKitResult<Self> {
        let source = match args.get_one::<String>("board") {
            Some(board) => ImageSource::Board(board.clone()),
            None => ImageSource::Names(
                args.get_many::<String>("images")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
            ),
        };
        let batches = args.get_one::<u64>("batches").map(|b| *b as usize);

        Ok(TransposeCommand { kit, source, batches })
    }
}

impl Command for TransposeCommand {
    fn execute(&mut self) -> MaskKitResult<()> {
        let names = match &self.source {
            ImageSource::Names(names) => names.clone(),
            ImageSource::Board(board) => self.kit.images_in_gallery(Some(board.as_str()))?,
        };
        let total = names.len();

        let transposed = self.kit.transpose_images(names, self.batches)?;
        if transposed.len() < total {
            warn!("{} images did not fill a whole row and were dropped", total - transposed.len());
        }
        for name in &transposed {
            println!("{}", name);
        }
        Ok(())
    }
}

/// Command for listing the images on a board
pub struct GalleryCommand {
    kit: MaskKit<DirectoryStore>,
    board: Option<String>,
}

impl GalleryCommand {
    pub fn new(args: &ArgMatches, kit: MaskKit<DirectoryStore>) -> MaskKitResult<Self> {
        Ok(GalleryCommand {
            kit,
            board: args.get_one::<String>("board").cloned(),
        })
    }
}

impl Command for GalleryCommand {
    fn execute(&mut self) -> MaskKitResult<()> {
        let names = self.kit.images_in_gallery(self.board.as_deref())?;
        info!("Found {} images", names.len());
        for name in &names {
            println!("{}", name);
        }
        Ok(())
    }
}
