//! Wall mockup composition
//!
//! Each wall page is a grid of repeated sample photographs (one image per
//! row, repeated across the columns), a title band below the grid, and an
//! optional strip of bordered footer images.

use crate::config::{WallConfig, WallPage};
use crate::io::{load_image, save_jpeg};
use crate::report::BatchReport;
use crate::types::*;
use ab_glyph::{FontVec, PxScale};
use image::imageops;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use std::path::Path;
use std::sync::Arc;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Height reserved for the title text band
const TITLE_HEIGHT: u32 = 50;
/// Gap between the sample grid and the title band
const TITLE_SPACING: u32 = 30;
/// Gap between the title band and the footer strip
const TITLE_FOOTER_SPACING: u32 = 20;
/// Gap below the footer strip
const FOOTER_BOTTOM_SPACING: u32 = 30;
/// Horizontal gap between footer images
const FOOTER_GAP: u32 = 20;
const FOOTER_BORDER: u32 = 2;

const TITLE_SCALE: f32 = 45.0;
const JPEG_QUALITY: u8 = 95;

/// Compose a single wall mockup.
///
/// `rows` holds one loaded image per grid row (`None` rows were skipped at
/// load time and leave a white gap). The first row's image defines the cell
/// size. The title band stays blank when no font is supplied.
pub fn compose_wall(
    page: &WallPage,
    rows: &[Option<RgbImage>],
    footers: &[RgbImage],
    font: Option<&FontVec>,
) -> Result<RgbImage> {
    let first = rows.first().and_then(|r| r.as_ref()).ok_or_else(|| {
        VisualError::Config(format!("Wall page '{}' has no usable first image", page.title))
    })?;

    let (img_w, img_h) = first.dimensions();
    let row_count = rows.len() as u32;
    let cols = page.cols;
    let padding = page.padding;

    let total_width = cols * img_w + (cols - 1) * padding;
    let total_height = row_count * img_h + (row_count - 1) * padding;

    let footer_height = footers
        .first()
        .map(|f| f.height() + TITLE_FOOTER_SPACING + FOOTER_BOTTOM_SPACING)
        .unwrap_or(0);
    let final_height = total_height + TITLE_SPACING + TITLE_HEIGHT + footer_height;

    let mut canvas = RgbImage::from_pixel(total_width, final_height, WHITE);

    // Sample grid: each row repeats its own image across all columns. The
    // column stride comes from the first image, so odd-sized rows clip.
    for (row, image) in rows.iter().enumerate() {
        let Some(image) = image else {
            log::warn!("wall page '{}': row {} image missing, leaving gap", page.title, row);
            continue;
        };
        for col in 0..cols {
            let x = col * (img_w + padding);
            let y = row as u32 * (img_h + padding);
            imageops::replace(&mut canvas, image, x as i64, y as i64);
        }
    }

    let title_start_y = total_height + TITLE_SPACING;
    if let Some(font) = font {
        draw_text_mut(
            &mut canvas,
            BLACK,
            page.title_padding as i32,
            title_start_y as i32,
            PxScale::from(TITLE_SCALE),
            font,
            &page.title,
        );
    }

    if let Some(first_footer) = footers.first() {
        // The first footer's width sets the stride for the whole strip.
        let stride = first_footer.width() + FOOTER_GAP;
        let footer_start_y = title_start_y + TITLE_HEIGHT + TITLE_FOOTER_SPACING;

        for (i, footer) in footers.iter().enumerate() {
            let bordered = add_border(footer, FOOTER_BORDER, BLACK);
            let x = page.title_padding + i as u32 * stride;
            imageops::replace(&mut canvas, &bordered, x as i64, footer_start_y as i64);
        }
    }

    Ok(canvas)
}

fn add_border(image: &RgbImage, width: u32, color: Rgb<u8>) -> RgbImage {
    let mut bordered = RgbImage::from_pixel(
        image.width() + 2 * width,
        image.height() + 2 * width,
        color,
    );
    imageops::replace(&mut bordered, image, width as i64, width as i64);
    bordered
}

/// Run a batch of wall mockups described by a JSON config.
///
/// Writes `<title>.jpg` into `out_dir` per page. A page whose first image
/// cannot be loaded is skipped with a report entry; later rows that fail to
/// load leave a white gap.
pub async fn run_batch(config: &WallConfig, out_dir: impl AsRef<Path>) -> Result<BatchReport> {
    config.validate()?;

    let out_dir = out_dir.as_ref();
    let font = load_title_font(config).await;
    let mut report = BatchReport::new();

    for page in &config.pages {
        log::info!("composing wall page '{}'", page.title);

        let mut rows = Vec::with_capacity(page.images.len());
        for name in &page.images {
            let path = page.path.join(name);
            match load_image(&path).await {
                Ok(img) => rows.push(Some(img.to_rgb8())),
                Err(e) => {
                    log::warn!("failed to load {}: {}", path.display(), e);
                    rows.push(None);
                }
            }
        }

        if rows.first().map(|r| r.is_none()).unwrap_or(true) {
            report.skipped(
                page.title.clone(),
                format!("first image '{}' failed to load", page.images[0]),
            );
            continue;
        }

        let mut footers = Vec::new();
        for name in &page.footer {
            let path = page.path.join(name);
            match load_image(&path).await {
                Ok(img) => footers.push(img.to_rgb8()),
                Err(e) => log::warn!("failed to load footer {}: {}", path.display(), e),
            }
        }

        let composed = {
            let page = page.clone();
            let font = font.clone();
            tokio::task::spawn_blocking(move || {
                compose_wall(&page, &rows, &footers, font.as_deref())
            })
            .await?
        };

        match composed {
            Ok(image) => {
                let out_path = out_dir.join(format!("{}.jpg", page.title));
                save_jpeg(image, &out_path, JPEG_QUALITY).await?;
                report.rendered(page.title.clone(), out_path);
            }
            Err(e) => report.skipped(page.title.clone(), e.to_string()),
        }
    }

    Ok(report)
}

async fn load_title_font(config: &WallConfig) -> Option<Arc<FontVec>> {
    let path = config.title_font.as_ref()?;
    match tokio::fs::read(path).await {
        Ok(bytes) => match FontVec::try_from_vec(bytes) {
            Ok(font) => Some(Arc::new(font)),
            Err(e) => {
                log::warn!("invalid title font {}: {}; leaving title bands blank", path.display(), e);
                None
            }
        },
        Err(e) => {
            log::warn!("cannot read title font {}: {}; leaving title bands blank", path.display(), e);
            None
        }
    }
}
