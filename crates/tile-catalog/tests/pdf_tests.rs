use image::{Rgb, RgbImage};
use std::path::PathBuf;
use tile_catalog::*;

fn write_sample_image(path: &PathBuf, color: [u8; 3]) {
    RgbImage::from_pixel(120, 90, Rgb(color)).save(path).unwrap();
}

#[tokio::test]
async fn test_generate_catalog_writes_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let image_dir = dir.path().join("images");
    std::fs::create_dir_all(&image_dir).unwrap();
    write_sample_image(&image_dir.join("one.jpg"), [200, 40, 40]);
    write_sample_image(&image_dir.join("two.jpg"), [40, 200, 40]);

    let config = CatalogConfig {
        title: "Test Catalog".to_string(),
        image_path: image_dir,
        output_pdf: dir.path().join("catalog.pdf"),
        pages: vec![vec![
            CatalogEntry::File("one.jpg".to_string()),
            CatalogEntry::Titled {
                file: "two.jpg".to_string(),
                title: Some("Second".to_string()),
            },
        ]],
    };

    let output = dir.path().join("catalog.pdf");
    let stats = generate_catalog(&config, &CatalogLayout::default(), &output)
        .await
        .unwrap();

    assert_eq!(stats.pages, 1);
    assert_eq!(stats.placed, 2);
    assert!(stats.skipped.is_empty());

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_generate_catalog_skips_missing_image() {
    let dir = tempfile::tempdir().unwrap();
    let image_dir = dir.path().join("images");
    std::fs::create_dir_all(&image_dir).unwrap();
    write_sample_image(&image_dir.join("good.jpg"), [10, 10, 200]);

    let config = CatalogConfig {
        title: "Partial".to_string(),
        image_path: image_dir,
        output_pdf: dir.path().join("catalog.pdf"),
        pages: vec![vec![
            CatalogEntry::File("good.jpg".to_string()),
            CatalogEntry::File("missing.jpg".to_string()),
        ]],
    };

    let output = dir.path().join("catalog.pdf");
    let stats = generate_catalog(&config, &CatalogLayout::default(), &output)
        .await
        .unwrap();

    assert_eq!(stats.placed, 1);
    assert_eq!(stats.skipped.len(), 1);
    assert_eq!(stats.skipped[0].0, "missing.jpg");
    assert!(output.exists());
}

#[tokio::test]
async fn test_generate_album_fits_pages() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("wall_a.jpg");
    let second = dir.path().join("wall_b.jpg");
    write_sample_image(&first, [100, 100, 0]);
    write_sample_image(&second, [0, 100, 100]);

    let output = dir.path().join("album.pdf");
    let stats = generate_album(
        &[first, second],
        &AlbumOptions::default(),
        &output,
    )
    .await
    .unwrap();

    assert_eq!(stats.pages, 2);
    assert_eq!(stats.placed, 2);

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_generate_album_compressed_is_smaller() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("big.jpg");
    // Noisy image so JPEG has something to throw away.
    let noisy = RgbImage::from_fn(400, 300, |x, y| {
        Rgb([
            (x * 7 % 256) as u8,
            (y * 13 % 256) as u8,
            ((x + y) * 5 % 256) as u8,
        ])
    });
    noisy.save(&image_path).unwrap();

    let plain = dir.path().join("plain.pdf");
    let mini = dir.path().join("mini.pdf");

    generate_album(
        &[image_path.clone()],
        &AlbumOptions::default(),
        &plain,
    )
    .await
    .unwrap();

    generate_album(
        &[image_path],
        &AlbumOptions {
            compress: true,
            ..Default::default()
        },
        &mini,
    )
    .await
    .unwrap();

    let plain_len = std::fs::metadata(&plain).unwrap().len();
    let mini_len = std::fs::metadata(&mini).unwrap().len();
    assert!(mini_len < plain_len);
}

#[tokio::test]
async fn test_generate_album_rejects_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate_album(
        &[],
        &AlbumOptions::default(),
        dir.path().join("album.pdf"),
    )
    .await;
    assert!(matches!(result, Err(CatalogError::NoPages)));
}

#[tokio::test]
async fn test_generate_album_all_unreadable_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate_album(
        &[dir.path().join("nope.jpg")],
        &AlbumOptions::default(),
        dir.path().join("album.pdf"),
    )
    .await;
    assert!(result.is_err());
}
