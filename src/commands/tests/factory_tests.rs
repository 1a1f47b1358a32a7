//! Tests for argument parsing and command creation

use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::commands::{build_cli, CommandFactory, MaskkitCommandFactory};
use crate::store::{DirectoryStore, ImageStore};

fn store_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(40, 30, Rgba([200, 10, 10, 255]))
        .save(dir.path().join("photo.png"))
        .unwrap();
    GrayImage::from_fn(40, 30, |x, y| {
        Luma([if (10..20).contains(&x) && (5..15).contains(&y) { 0 } else { 255 }])
    })
    .save(dir.path().join("mask.png"))
    .unwrap();
    dir
}

fn run(args: &[&str]) -> crate::errors::MaskKitResult<()> {
    let matches = build_cli().try_get_matches_from(args).unwrap();
    let mut command = MaskkitCommandFactory::new().create_command(&matches)?;
    command.execute()
}

#[test]
fn test_cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn test_declared_minimums_are_enforced() {
    assert!(build_cli()
        .try_get_matches_from(["maskkit", "fill-shapes", "a.png", "--min-size", "2"])
        .is_err());
    assert!(build_cli()
        .try_get_matches_from(["maskkit", "size-scale", "--scale-to", "64"])
        .is_err());
    assert!(build_cli()
        .try_get_matches_from(["maskkit", "transpose", "--batches", "0", "a"])
        .is_err());
    assert!(build_cli()
        .try_get_matches_from(["maskkit", "fill-shapes", "a.png", "--color", "blue"])
        .is_err());
}

#[test]
fn test_negative_mask_offsets_parse() {
    let matches = build_cli()
        .try_get_matches_from(["maskkit", "mask-box", "a.png", "m.png", "--mask-x", "-12"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    assert_eq!(sub.get_one::<i64>("mask-x"), Some(&-12));
    assert_eq!(sub.get_one::<i64>("mask-y"), Some(&0));
}

#[test]
fn test_mask_box_command_writes_outputs() {
    let dir = store_dir();
    let root = dir.path().to_str().unwrap();

    run(&["maskkit", "--store", root, "mask-box", "photo.png", "mask.png", "-p", "2"]).unwrap();

    let store = DirectoryStore::new(root).unwrap();
    // box (10,5)-(19,14) padded by 2
    let image = store.get_image("general_00001.png").unwrap();
    assert_eq!((image.width(), image.height()), (13, 13));
    assert!(store.get_image("mask_00001.png").is_ok());
}

#[test]
fn test_fill_shapes_command_with_seed() {
    let dir = store_dir();
    let root = dir.path().to_str().unwrap();

    run(&[
        "maskkit", "fill-shapes", "photo.png", "--store", root, "--mask", "mask.png",
        "--seed", "5", "--color", "#00ff00",
    ])
    .unwrap();

    let store = DirectoryStore::new(root).unwrap();
    assert!(store.get_image("general_00001.png").is_ok());
    assert!(store.get_image("mask_00001.png").is_ok());
}

#[test]
fn test_invert_many_and_metadata() {
    let dir = store_dir();
    let root = dir.path().to_str().unwrap();

    run(&["maskkit", "-s", root, "mask-invert", "mask.png", "photo.png"]).unwrap();
    run(&["maskkit", "-s", root, "metadata", "mask.png"]).unwrap();

    let store = DirectoryStore::new(root).unwrap();
    assert_eq!(store.board_image_names("none").unwrap().len(), 4);
}

#[test]
fn test_collection_commands() {
    let dir = store_dir();
    let root = dir.path().to_str().unwrap();

    run(&["maskkit", "-s", root, "gallery"]).unwrap();
    run(&["maskkit", "-s", root, "transpose", "-b", "2", "a", "b", "c", "d"]).unwrap();
    run(&["maskkit", "-s", root, "transpose", "--board", "none"]).unwrap();
    assert!(run(&["maskkit", "-s", root, "gallery", "--board", "missing"]).is_err());
}

#[test]
fn test_config_overrides_defaults() {
    let dir = store_dir();
    let root = dir.path().to_str().unwrap();
    let config = dir.path().join("defaults.toml");
    std::fs::write(&config, "[size_scale]\nwidth = 1024\nheight = 512\nscale_to = 512\n").unwrap();

    run(&["maskkit", "-s", root, "--config", config.to_str().unwrap(), "size-scale"]).unwrap();
    run(&["maskkit", "-s", root, "size-scale", "--width", "100", "--height", "50", "--factor", "1.0"])
        .unwrap();
    run(&["maskkit", "nodes"]).unwrap();
}

#[test]
fn test_missing_store_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(run(&["maskkit", "-s", missing.to_str().unwrap(), "gallery"]).is_err());
}

#[test]
fn test_config_below_minimum_is_rejected() {
    let dir = store_dir();
    let root = dir.path().to_str().unwrap();
    let config = dir.path().join("defaults.toml");
    std::fs::write(&config, "[transpose_images]\nbatches = 0\n").unwrap();

    let result = run(&["maskkit", "-s", root, "--config", config.to_str().unwrap(), "transpose", "a", "b"]);
    assert!(matches!(result, Err(crate::errors::MaskKitError::ConfigError(_))));
}

#[test]
fn test_board_outside_store_is_rejected() {
    let dir = store_dir();
    let root = dir.path().join("inner");
    std::fs::create_dir(&root).unwrap();

    assert!(run(&["maskkit", "-s", root.to_str().unwrap(), "gallery", "--board", ".."]).is_err());
}
