//! Tests for the in-memory store

use image::{DynamicImage, GrayImage, RgbaImage};
use serde_json::json;

use crate::errors::MaskKitError;
use crate::store::{ImageCategory, ImageStore, MemoryStore, Metadata, NO_BOARD};

#[test]
fn test_save_and_get() {
    let mut store = MemoryStore::new();
    let image = DynamicImage::ImageRgba8(RgbaImage::new(6, 4));

    let saved = store.save_image(image, ImageCategory::General).unwrap();
    assert_eq!((saved.width, saved.height), (6, 4));
    assert_eq!(saved.name, "general-1");

    let mask = store
        .save_image(DynamicImage::ImageLuma8(GrayImage::new(2, 2)), ImageCategory::Mask)
        .unwrap();
    assert_eq!(mask.name, "mask-2");

    assert_eq!(store.get_image(&saved.name).unwrap().width(), 6);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_missing_image() {
    let store = MemoryStore::new();
    assert!(matches!(store.get_image("nope"), Err(MaskKitError::ImageNotFound(_))));
}

#[test]
fn test_metadata_lookup() {
    let mut store = MemoryStore::new();
    store.insert_image("a.png", DynamicImage::ImageLuma8(GrayImage::new(1, 1)));
    store.insert_image("b.png", DynamicImage::ImageLuma8(GrayImage::new(1, 1)));

    let mut metadata = Metadata::new();
    metadata.insert("seed".to_string(), json!(42));
    store.insert_metadata("a.png", metadata.clone());

    assert_eq!(store.get_metadata("a.png").unwrap(), Some(metadata));
    assert_eq!(store.get_metadata("b.png").unwrap(), None);
}

#[test]
fn test_boards() {
    let mut store = MemoryStore::new();
    for name in ["one", "two", "three"] {
        store.insert_image(name, DynamicImage::ImageLuma8(GrayImage::new(1, 1)));
    }
    store.add_to_board("portraits", "two");
    store.add_to_board("portraits", "one");

    assert_eq!(store.board_image_names("portraits").unwrap(), vec!["two", "one"]);
    assert_eq!(store.board_image_names(NO_BOARD).unwrap(), vec!["three"]);
    assert!(matches!(
        store.board_image_names("landscapes"),
        Err(MaskKitError::BoardNotFound(_))
    ));
}
