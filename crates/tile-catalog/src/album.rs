//! One-image-per-page PDF albums
//!
//! Bundles pre-rendered visualizations (wall mockups, floor views) into a
//! single document, one full page per image, scaled to fit and centered.

use crate::layout::fit_dimensions;
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, XObjectTransform};
use std::path::{Path, PathBuf};

const COMPRESS_SCALE: f32 = 0.7;
const COMPRESS_JPEG_QUALITY: u8 = 25;

/// Album rendering configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumOptions {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Margin kept around each image
    pub margin_pt: f32,
    /// Shrink images to 70% and re-encode aggressively to cut file size
    pub compress: bool,
}

impl Default for AlbumOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Landscape,
            margin_pt: 20.0,
            compress: false,
        }
    }
}

/// Render one page per image and write the album to `output_path`.
///
/// Unreadable images are skipped and reported; the album fails only when
/// nothing could be placed at all.
pub async fn generate_album(
    images: &[PathBuf],
    options: &AlbumOptions,
    output_path: impl AsRef<Path>,
) -> Result<RenderStats> {
    if images.is_empty() {
        return Err(CatalogError::NoPages);
    }

    let images = images.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let (bytes, stats) =
        tokio::task::spawn_blocking(move || generate_album_bytes(&images, &options)).await??;

    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&output_path, bytes).await?;

    Ok(stats)
}

fn generate_album_bytes(
    images: &[PathBuf],
    options: &AlbumOptions,
) -> Result<(Vec<u8>, RenderStats)> {
    let mut doc = PdfDocument::new("Visualizations");

    let (page_width_pt, page_height_pt) = options.paper_size.dimensions_pt(options.orientation);
    let max_width = page_width_pt - 2.0 * options.margin_pt;
    let max_height = page_height_pt - 2.0 * options.margin_pt;

    let mut stats = RenderStats::default();

    for path in images {
        let raw = match load_page_image(path, options.compress) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                stats
                    .skipped
                    .push((path.display().to_string(), e.to_string()));
                continue;
            }
        };

        let (w_pt, h_pt) =
            fit_dimensions(raw.width as f32, raw.height as f32, max_width, max_height);
        let image_id = doc.add_image(&raw);

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt((page_width_pt - w_pt) / 2.0)),
                translate_y: Some(Pt((page_height_pt - h_pt) / 2.0)),
                rotate: None,
                scale_x: Some(w_pt / raw.width as f32),
                scale_y: Some(h_pt / raw.height as f32),
                dpi: Some(72.0),
            },
        }];

        doc.pages.push(PdfPage::new(
            Mm::from(Pt(page_width_pt)),
            Mm::from(Pt(page_height_pt)),
            ops,
        ));
        stats.pages += 1;
        stats.placed += 1;
    }

    if stats.placed == 0 {
        return Err(CatalogError::NoPages);
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok((bytes, stats))
}

fn load_page_image(path: &Path, compress: bool) -> Result<RawImage> {
    let bytes = std::fs::read(path)?;

    let bytes = if compress {
        let img = image::load_from_memory(&bytes)?;
        let resized = img.resize(
            ((img.width() as f32 * COMPRESS_SCALE) as u32).max(1),
            ((img.height() as f32 * COMPRESS_SCALE) as u32).max(1),
            FilterType::Lanczos3,
        );
        let mut jpeg = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, COMPRESS_JPEG_QUALITY);
        encoder.encode_image(&resized.to_rgb8())?;
        jpeg
    } else {
        bytes
    };

    let mut warnings = Vec::new();
    RawImage::decode_from_bytes(&bytes, &mut warnings).map_err(CatalogError::Pdf)
}
