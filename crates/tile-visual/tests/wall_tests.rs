use image::{DynamicImage, Rgb, RgbImage};
use std::path::PathBuf;
use tile_visual::wall::{self, compose_wall};
use tile_visual::{WallConfig, WallPage};

fn sample_page() -> WallPage {
    WallPage {
        title: "Glossy".to_string(),
        path: PathBuf::from("unused"),
        images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        cols: 3,
        padding: 2,
        title_padding: 30,
        footer: Vec::new(),
    }
}

#[test]
fn test_compose_dimensions_without_footer() {
    let rows = vec![
        Some(RgbImage::from_pixel(40, 30, Rgb([100, 0, 0]))),
        Some(RgbImage::from_pixel(40, 30, Rgb([0, 100, 0]))),
    ];

    let wall = compose_wall(&sample_page(), &rows, &[], None).unwrap();

    // 3 cols * 40 px + 2 gaps * 2 px wide; 2 rows * 30 px + 1 gap * 2 px,
    // plus 30 px spacing and the 50 px title band.
    assert_eq!(wall.dimensions(), (3 * 40 + 2 * 2, 2 * 30 + 2 + 30 + 50));
}

#[test]
fn test_compose_dimensions_with_footer() {
    let rows = vec![Some(RgbImage::from_pixel(40, 30, Rgb([100, 0, 0])))];
    let footers = vec![RgbImage::from_pixel(20, 10, Rgb([0, 0, 100]))];

    let wall = compose_wall(&sample_page(), &rows, &footers, None).unwrap();

    // Footer adds its height plus the 20 px gap above and 30 px below.
    let expected_height = 30 + 30 + 50 + (10 + 20 + 30);
    assert_eq!(wall.dimensions(), (3 * 40 + 2 * 2, expected_height));
}

#[test]
fn test_rows_repeat_across_columns() {
    let rows = vec![
        Some(RgbImage::from_pixel(40, 30, Rgb([100, 0, 0]))),
        Some(RgbImage::from_pixel(40, 30, Rgb([0, 100, 0]))),
    ];

    let wall = compose_wall(&sample_page(), &rows, &[], None).unwrap();

    // Every column of row 0 shows the first image, row 1 the second.
    for col in 0..3u32 {
        let x = col * (40 + 2) + 5;
        assert_eq!(wall.get_pixel(x, 10), &Rgb([100, 0, 0]));
        assert_eq!(wall.get_pixel(x, 32 + 10), &Rgb([0, 100, 0]));
    }
    // The gap between columns keeps the white background.
    assert_eq!(wall.get_pixel(41, 10), &Rgb([255, 255, 255]));
}

#[test]
fn test_missing_row_leaves_gap() {
    let rows = vec![
        Some(RgbImage::from_pixel(40, 30, Rgb([100, 0, 0]))),
        None,
    ];

    let wall = compose_wall(&sample_page(), &rows, &[], None).unwrap();
    assert_eq!(wall.get_pixel(5, 32 + 10), &Rgb([255, 255, 255]));
}

#[test]
fn test_missing_first_image_is_an_error() {
    let rows = vec![None, Some(RgbImage::from_pixel(40, 30, Rgb([0, 0, 0])))];
    assert!(compose_wall(&sample_page(), &rows, &[], None).is_err());
}

#[test]
fn test_footer_border_is_black() {
    let rows = vec![Some(RgbImage::from_pixel(40, 30, Rgb([100, 0, 0])))];
    let footers = vec![RgbImage::from_pixel(20, 10, Rgb([0, 0, 100]))];
    let page = sample_page();

    let wall = compose_wall(&page, &rows, &footers, None).unwrap();

    // Footer strip starts below grid + spacing + title band + gap.
    let footer_y = 30 + 30 + 50 + 20;
    assert_eq!(wall.get_pixel(page.title_padding, footer_y), &Rgb([0, 0, 0]));
    // Inside the border sits the footer image itself.
    assert_eq!(
        wall.get_pixel(page.title_padding + 2, footer_y + 2),
        &Rgb([0, 0, 100])
    );
}

#[tokio::test]
async fn test_run_batch_skips_unloadable_page() {
    let dir = tempfile::tempdir().unwrap();
    let image_dir = dir.path().join("samples");
    std::fs::create_dir_all(&image_dir).unwrap();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, Rgb([120, 80, 40])))
        .save(image_dir.join("good.jpg"))
        .unwrap();

    let config = WallConfig {
        output_pdf: dir.path().join("walls.pdf"),
        title_font: None,
        pages: vec![
            WallPage {
                title: "Good".to_string(),
                path: image_dir.clone(),
                images: vec!["good.jpg".to_string()],
                cols: 2,
                padding: 3,
                title_padding: 30,
                footer: Vec::new(),
            },
            WallPage {
                title: "Broken".to_string(),
                path: image_dir.clone(),
                images: vec!["nope.jpg".to_string()],
                cols: 2,
                padding: 3,
                title_padding: 30,
                footer: Vec::new(),
            },
        ],
    };

    let out_dir = dir.path().join("out");
    let report = wall::run_batch(&config, &out_dir).await.unwrap();

    assert_eq!(report.rendered_count(), 1);
    assert_eq!(report.skipped_count(), 1);
    assert!(out_dir.join("Good.jpg").exists());
    assert!(!out_dir.join("Broken.jpg").exists());
}
