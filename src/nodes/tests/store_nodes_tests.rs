//! Tests for invoking nodes against a store

use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use crate::errors::MaskKitError;
use crate::nodes::*;
use crate::store::{ImageStore, MemoryStore, Metadata};

fn store_with_pair() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_image(
        "photo.png",
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 48, Rgba([10, 20, 30, 255]))),
    );
    let mask = GrayImage::from_fn(64, 48, |x, y| {
        Luma([if (20..30).contains(&x) && (10..20).contains(&y) { 0 } else { 255 }])
    });
    store.insert_image("mask.png", DynamicImage::ImageLuma8(mask));
    store
}

#[test]
fn test_mask_box_invocation_saves_pair() {
    let mut store = store_with_pair();
    let mut rng = StdRng::seed_from_u64(0);
    let mut node = MaskBox::new("photo.png", "mask.png");
    node.padding = 4;

    let output = {
        let mut context = InvocationContext::new(&mut store, &mut rng);
        node.invoke(&mut context).unwrap()
    };

    // box (20,10)-(29,19) padded by 4
    assert_eq!((output.x, output.y), (16, 6));
    assert_eq!((output.image.width, output.image.height), (17, 17));
    assert_eq!((output.mask.width, output.mask.height), (17, 17));
    assert!(output.mask.name.starts_with("mask-"));
    assert!(store.get_image(&output.image.name).is_ok());
}

#[test]
fn test_fill_shapes_invocation() {
    let mut store = store_with_pair();
    let mut rng = StdRng::seed_from_u64(11);
    let mut node = FillShapes::new("photo.png");
    node.mask = Some("mask.png".to_string());
    node.settings.padding = 2;

    let output = {
        let mut context = InvocationContext::new(&mut store, &mut rng);
        node.invoke(&mut context).unwrap()
    };

    // the result never leaves the mask box (20,10)-(29,19) plus padding
    assert!(output.x >= 18 && output.y >= 8);
    assert!(output.x + output.image.width as i64 <= 31);
    assert!(output.y + output.image.height as i64 <= 21);
}

#[test]
fn test_mask_invert_invocation() {
    let mut store = store_with_pair();
    let mut rng = StdRng::seed_from_u64(0);

    let output = {
        let mut context = InvocationContext::new(&mut store, &mut rng);
        MaskInvert::new("mask.png").invoke(&mut context).unwrap()
    };

    let inverted = store.get_image(&output.name).unwrap().to_luma8();
    assert_eq!(inverted.get_pixel(25, 15)[0], 255);
    assert_eq!(inverted.get_pixel(0, 0)[0], 0);
}

#[test]
fn test_metadata_defaults_to_empty() {
    let mut store = store_with_pair();
    let mut metadata = Metadata::new();
    metadata.insert("model".to_string(), json!("sdxl"));
    store.insert_metadata("photo.png", metadata.clone());
    let mut rng = StdRng::seed_from_u64(0);
    let mut context = InvocationContext::new(&mut store, &mut rng);

    assert_eq!(ImageMetadata::new("photo.png").invoke(&mut context).unwrap(), metadata);
    assert!(ImageMetadata::new("mask.png").invoke(&mut context).unwrap().is_empty());
    assert!(matches!(
        ImageMetadata::new("absent.png").invoke(&mut context),
        Err(MaskKitError::ImageNotFound(_))
    ));
}

#[test]
fn test_gallery_and_transpose() {
    let mut store = MemoryStore::new();
    for i in 1..=6 {
        let name = format!("img{}", i);
        store.insert_image(&name, DynamicImage::ImageLuma8(GrayImage::new(1, 1)));
        store.add_to_board("grid", &name);
    }
    store.insert_image("loose", DynamicImage::ImageLuma8(GrayImage::new(1, 1)));
    let mut rng = StdRng::seed_from_u64(0);
    let mut context = InvocationContext::new(&mut store, &mut rng);

    let names = ImagesInGallery::new(Some("grid")).invoke(&mut context).unwrap();
    assert_eq!(names.len(), 6);
    assert_eq!(ImagesInGallery::new(None).invoke(&mut context).unwrap(), vec!["loose"]);

    let transposed = TransposeImages::new(names, 2).invoke(&mut context).unwrap();
    assert_eq!(transposed, vec!["img1", "img3", "img5", "img2", "img4", "img6"]);
}

#[test]
fn test_size_scale_invocation() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mut context = InvocationContext::new(&mut store, &mut rng);

    let size = SizeScale::default().invoke(&mut context).unwrap();
    assert_eq!((size.width, size.height), (768, 768));
    assert_eq!(size.scale_factor, Some(1.5));
}

#[test]
fn test_registry_ids_are_unique() {
    let infos = registry();
    assert_eq!(infos.len(), 7);
    for (i, a) in infos.iter().enumerate() {
        for b in &infos[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}
