//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};

use crate::utils::color_utils::Color;

fn parse_color(value: &str) -> Result<Color, String> {
    value.parse::<Color>().map_err(|e| e.to_string())
}

fn mask_offset_args(command: ClapCommand) -> ClapCommand {
    command
        .arg(
            Arg::new("mask-x")
                .long("mask-x")
                .help("Offset for the X-axis of the input mask")
                .value_name("PIXELS")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .default_value("0"),
        )
        .arg(
            Arg::new("mask-y")
                .long("mask-y")
                .help("Offset for the Y-axis of the input mask")
                .value_name("PIXELS")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .default_value("0"),
        )
}

fn padding_arg() -> Arg {
    Arg::new("padding")
        .short('p')
        .long("padding")
        .help("All-axis padding around the output mask in pixels")
        .value_name("PIXELS")
        .value_parser(value_parser!(u32))
}

/// Build the `maskkit` command line
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("maskkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mask bounding-box, shape fill and image-geometry nodes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("store")
                .short('s')
                .long("store")
                .help("Directory holding the images")
                .value_name("DIR")
                .default_value(".")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding node defaults")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(mask_offset_args(
            ClapCommand::new("mask-box")
                .about("Crop an image and mask to the smallest box around the mask")
                .arg(Arg::new("image").help("The image to process").required(true).index(1))
                .arg(Arg::new("mask").help("The mask limiting the area").required(true).index(2))
                .arg(padding_arg()),
        ))
        .subcommand(mask_offset_args(
            ClapCommand::new("fill-shapes")
                .about("Fill random solid shapes onto an image")
                .arg(Arg::new("image").help("The image to process").required(true).index(1))
                .arg(
                    Arg::new("mask")
                        .short('m')
                        .long("mask")
                        .help("Mask limiting the area")
                        .value_name("IMAGE"),
                )
                .arg(
                    Arg::new("color")
                        .short('c')
                        .long("color")
                        .help("Fill color as r,g,b[,a] or #rrggbb[aa]")
                        .value_name("COLOR")
                        .value_parser(parse_color),
                )
                .arg(
                    Arg::new("num-shapes")
                        .short('n')
                        .long("num-shapes")
                        .help("Number of shapes")
                        .value_name("COUNT")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("min-size")
                        .long("min-size")
                        .help("Min size of shapes in pixels")
                        .value_name("PIXELS")
                        .value_parser(value_parser!(u32).range(3..)),
                )
                .arg(
                    Arg::new("max-size")
                        .long("max-size")
                        .help("Max size of shapes in pixels")
                        .value_name("PIXELS")
                        .value_parser(value_parser!(u32).range(5..)),
                )
                .arg(padding_arg())
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for reproducible shape placement")
                        .value_name("SEED")
                        .value_parser(value_parser!(u64)),
                ),
        ))
        .subcommand(
            ClapCommand::new("mask-invert")
                .about("Invert one or more masks")
                .arg(
                    Arg::new("images")
                        .help("The mask images to process")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                ),
        )
        .subcommand(
            ClapCommand::new("size-scale")
                .about("Calculate a scaled size that is a multiple of 8 pixels")
                .arg(
                    Arg::new("width")
                        .long("width")
                        .help("Source image width")
                        .value_name("PIXELS")
                        .value_parser(value_parser!(u32).range(8..)),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .help("Source image height")
                        .value_name("PIXELS")
                        .value_parser(value_parser!(u32).range(8..)),
                )
                .arg(
                    Arg::new("scale-to")
                        .long("scale-to")
                        .help("Size of the bigger side after scaling")
                        .value_name("PIXELS")
                        .value_parser(value_parser!(u32).range(128..))
                        .conflicts_with("factor"),
                )
                .arg(
                    Arg::new("factor")
                        .long("factor")
                        .help("Scale factor applied to both sides")
                        .value_name("FACTOR")
                        .value_parser(value_parser!(f64)),
                ),
        )
        .subcommand(
            ClapCommand::new("transpose")
                .about("Transpose a row-major list of images into column-major order")
                .arg(
                    Arg::new("batches")
                        .short('b')
                        .long("batches")
                        .help("Images per row of the grid")
                        .value_name("COUNT")
                        .value_parser(value_parser!(u64).range(1..)),
                )
                .arg(
                    Arg::new("images")
                        .help("Image names, row by row")
                        .num_args(0..)
                        .index(1),
                )
                .arg(
                    Arg::new("board")
                        .long("board")
                        .help("Take the images from this board instead")
                        .value_name("BOARD")
                        .conflicts_with("images"),
                ),
        )
        .subcommand(
            ClapCommand::new("metadata")
                .about("Print the metadata of an image")
                .arg(Arg::new("image").help("The image to get metadata for").required(true).index(1)),
        )
        .subcommand(
            ClapCommand::new("gallery")
                .about("List all images on a board")
                .arg(
                    Arg::new("board")
                        .short('b')
                        .long("board")
                        .help("Board id, images on no board when omitted")
                        .value_name("BOARD"),
                ),
        )
        .subcommand(ClapCommand::new("nodes").about("List the available nodes"))
}
