use image::imageops;
use image::{DynamicImage, Rgb, RgbImage};
use tile_visual::floor::{generate_floor, tile_grid};
use tile_visual::{FloorConfig, FloorOptions, FloorPage, floor};

/// 200x200 tile with an off-center marker so rotations are observable
fn marked_tile() -> RgbImage {
    let mut tile = RgbImage::from_pixel(200, 200, Rgb([240, 240, 240]));
    for y in 0..20 {
        for x in 0..20 {
            tile.put_pixel(x, y, Rgb([255, 0, 0]));
        }
    }
    tile
}

#[test]
fn test_three_by_three_rotated_grid() {
    let tile = marked_tile();
    let options = FloorOptions {
        rows: 3,
        cols: 3,
        rotate: true,
        padding: 0,
        ..Default::default()
    };

    let canvas = tile_grid(&DynamicImage::ImageRgb8(tile.clone()), &options).unwrap();
    assert_eq!(canvas.dimensions(), (600, 600));

    // Cell (row 0, col 1) holds the source tile rotated -90 degrees
    // (a clockwise quarter turn).
    let cell = imageops::crop_imm(&canvas, 200, 0, 200, 200).to_image();
    let expected = imageops::rotate90(&tile);
    assert_eq!(cell.as_raw(), expected.as_raw());

    // Periodicity: (row 2, col 2) matches (0, 0), the unrotated tile.
    let cell = imageops::crop_imm(&canvas, 400, 400, 200, 200).to_image();
    assert_eq!(cell.as_raw(), tile.as_raw());
}

#[tokio::test]
async fn test_generate_floor_small_grid_keeps_flat_view() {
    // A 3x3 grid of 200 px tiles is far smaller than the default crop
    // margins, so the perspective stage falls back to the flat grid.
    let tile = DynamicImage::ImageRgb8(marked_tile());
    let options = FloorOptions {
        rows: 3,
        cols: 3,
        rotate: true,
        ..Default::default()
    };

    let floor = generate_floor(&tile, &options).await.unwrap();
    let flat = tile_grid(&tile, &options).unwrap();
    assert_eq!(floor.as_raw(), flat.as_raw());
}

#[tokio::test]
async fn test_generate_floor_rejects_empty_grid() {
    let tile = DynamicImage::ImageRgb8(marked_tile());
    let options = FloorOptions {
        rows: 0,
        cols: 3,
        ..Default::default()
    };
    assert!(generate_floor(&tile, &options).await.is_err());
}

#[tokio::test]
async fn test_run_batch_writes_both_views() {
    let dir = tempfile::tempdir().unwrap();
    let image_dir = dir.path().join("tiles");
    std::fs::create_dir_all(&image_dir).unwrap();
    DynamicImage::ImageRgb8(marked_tile())
        .save(image_dir.join("oak.jpg"))
        .unwrap();

    let config = FloorConfig {
        image_path: image_dir,
        rows: 2,
        cols: 2,
        depth_factor: 2.5,
        pages: vec![FloorPage {
            file: "oak.jpg".to_string(),
            title: "Oak".to_string(),
            rotate: true,
            padding: 0,
        }],
    };

    let out_dir = dir.path().join("out");
    let report = floor::run_batch(&config, &out_dir).await.unwrap();

    assert_eq!(report.rendered_count(), 1);
    assert!(out_dir.join("oak_top.jpg").exists());
    assert!(out_dir.join("oak_prep.jpg").exists());
}

#[tokio::test]
async fn test_run_batch_missing_tile_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let config = FloorConfig {
        image_path: dir.path().to_owned(),
        rows: 2,
        cols: 2,
        depth_factor: 2.5,
        pages: vec![FloorPage {
            file: "missing.jpg".to_string(),
            title: "Missing".to_string(),
            rotate: false,
            padding: 0,
        }],
    };

    let result = floor::run_batch(&config, dir.path().join("out")).await;
    assert!(result.is_err());
}
