//! Integration tests for the MaskKit facade

use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
use serde_json::json;

use maskkit::nodes::{ScaleMode, ShapeSettings};
use maskkit::utils::color_utils::Color;
use maskkit::utils::node_defaults::NodeDefaults;
use maskkit::{DirectoryStore, ImageStore, MaskKit, MaskKitError, MemoryStore, Metadata};

fn checkerboard(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

fn circle_mask(width: u32, height: u32, cx: i64, cy: i64, r: i64) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let (dx, dy) = (x as i64 - cx, y as i64 - cy);
        Luma([if dx * dx + dy * dy <= r * r { 0 } else { 255 }])
    })
}

#[test]
fn test_inpaint_workflow_in_memory() {
    let mut store = MemoryStore::new();
    store.insert_image("photo", DynamicImage::ImageRgba8(checkerboard(256, 192)));
    store.insert_image("mask", DynamicImage::ImageLuma8(circle_mask(256, 192, 128, 96, 30)));

    let mut kit = MaskKit::with_seed(store, 42);

    // crop to the mask with 16px of context
    let crop = kit.mask_box("photo", "mask", (0, 0), Some(16)).unwrap();
    assert_eq!((crop.x, crop.y), (98 - 16, 66 - 16));
    assert_eq!((crop.image.width, crop.image.height), (60 + 32, 60 + 32));

    // fill shapes inside the same mask
    let settings = ShapeSettings {
        num_shapes: 5,
        min_size: 10,
        max_size: 25,
        color: Color::new(0, 128, 255, 255),
        padding: 8,
    };
    let filled = kit.fill_shapes("photo", Some(("mask", (0, 0))), Some(settings)).unwrap();
    assert!(filled.x >= 98 - 8 && filled.y >= 66 - 8);
    assert!(filled.x + filled.image.width as i64 <= 158 + 8);
    assert!(filled.y + filled.image.height as i64 <= 126 + 8);

    // invert the filled mask twice
    let once = kit.mask_invert(&filled.mask.name).unwrap();
    let twice = kit.mask_invert(&once.name).unwrap();
    let store = kit.into_store();
    assert_eq!(
        store.get_image(&twice.name).unwrap().to_luma8(),
        store.get_image(&filled.mask.name).unwrap().to_luma8()
    );
}

#[test]
fn test_size_and_collections() {
    let mut store = MemoryStore::new();
    for i in 0..7 {
        let name = format!("cell{}", i);
        store.insert_image(&name, DynamicImage::ImageLuma8(GrayImage::new(1, 1)));
        store.add_to_board("grid", &name);
    }
    let mut kit = MaskKit::new(store);

    let size = kit.size_scale(1024, 512, ScaleMode::ScaleTo(512)).unwrap();
    assert_eq!((size.width, size.height, size.scale_factor), (512, 256, Some(0.5)));

    let names = kit.images_in_gallery(Some("grid")).unwrap();
    let transposed = kit.transpose_images(names, None).unwrap();
    assert_eq!(transposed, vec!["cell0", "cell2", "cell4", "cell1", "cell3", "cell5"]);
}

#[test]
fn test_defaults_flow_into_nodes() {
    let mut store = MemoryStore::new();
    store.insert_image("photo", DynamicImage::ImageRgba8(checkerboard(200, 200)));
    store.insert_image("mask", DynamicImage::ImageLuma8(circle_mask(200, 200, 100, 100, 10)));

    let defaults = NodeDefaults::builtin()
        .merge_str("[mask_box]\npadding = 0\n[transpose_images]\nbatches = 3\n")
        .unwrap();
    let mut kit = MaskKit::new(store).with_defaults(defaults);

    let crop = kit.mask_box("photo", "mask", (0, 0), None).unwrap();
    assert_eq!((crop.x, crop.y), (90, 90));
    assert_eq!((crop.image.width, crop.image.height), (20, 20));

    let items: Vec<String> = (1..=6).map(|i| i.to_string()).collect();
    assert_eq!(kit.transpose_images(items, None).unwrap(), vec!["1", "4", "2", "5", "3", "6"]);
}

#[test]
fn test_directory_store_workflow() {
    let dir = tempfile::tempdir().unwrap();
    checkerboard(64, 64).save(dir.path().join("photo.png")).unwrap();
    circle_mask(32, 32, 16, 16, 6).save(dir.path().join("mask.png")).unwrap();

    let store = DirectoryStore::new(dir.path()).unwrap();
    let mut metadata = Metadata::new();
    metadata.insert("width".to_string(), json!(64));
    store.insert_metadata("photo.png", &metadata).unwrap();

    let mut kit = MaskKit::with_seed(store, 9);
    assert_eq!(kit.image_metadata("photo.png").unwrap(), metadata);
    assert!(kit.image_metadata("mask.png").unwrap().is_empty());

    // a 32x32 mask placed at (20, 24) on the 64x64 image
    let crop = kit.mask_box("photo.png", "mask.png", (20, 24), Some(4)).unwrap();
    assert_eq!((crop.x, crop.y), (20 + 10 - 4, 24 + 10 - 4));
    let mask = kit.store().get_image(&crop.mask.name).unwrap().to_luma8();
    assert_eq!(mask.get_pixel(10, 4)[0], 0);
    assert_eq!(mask.get_pixel(0, 0)[0], 255);

    let listed = kit.images_in_gallery(None).unwrap();
    assert!(listed.contains(&crop.image.name));
    assert!(listed.contains(&"photo.png".to_string()));

    assert!(matches!(
        kit.mask_box("photo.png", "missing.png", (0, 0), None),
        Err(MaskKitError::ImageNotFound(_))
    ));
}
