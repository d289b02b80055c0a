//! Catalog PDF rendering
//!
//! Builds the paginated catalog: header and rule line, a grid of thumbnail
//! XObjects with captions, and a page counter in the footer. Thumbnails
//! are rasterized and JPEG-encoded in memory before embedding.

use crate::config::CatalogConfig;
use crate::layout::{SlotPosition, cell_size_pt, fit_dimensions, slot_position};
use crate::options::CatalogLayout;
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use printpdf::{
    BuiltinFont, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Point, Pt,
    RawImage, TextItem, XObjectTransform,
};
use std::path::Path;

const CAPTION_OFFSET_PT: f32 = 15.0;
const THUMBNAIL_JPEG_QUALITY: u8 = 90;

/// Render the catalog and write it to `output_path`
pub async fn generate_catalog(
    config: &CatalogConfig,
    layout: &CatalogLayout,
    output_path: impl AsRef<Path>,
) -> Result<RenderStats> {
    config.validate()?;
    layout.validate()?;

    let config = config.clone();
    let layout = layout.clone();
    let output_path = output_path.as_ref().to_owned();

    let (bytes, stats) =
        tokio::task::spawn_blocking(move || generate_catalog_bytes(&config, &layout)).await??;

    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&output_path, bytes).await?;

    Ok(stats)
}

fn generate_catalog_bytes(
    config: &CatalogConfig,
    layout: &CatalogLayout,
) -> Result<(Vec<u8>, RenderStats)> {
    let mut doc = PdfDocument::new(&config.title);

    let (page_width_pt, page_height_pt) = layout.paper_size.dimensions_pt(layout.orientation);
    let cell = cell_size_pt(layout);
    let total_pages = config.pages.len();

    let mut stats = RenderStats {
        pages: total_pages,
        ..Default::default()
    };

    for (page_num, entries) in config.pages.iter().enumerate() {
        let mut ops = Vec::new();

        draw_header(&mut ops, layout, &config.title, page_width_pt, page_height_pt);
        draw_page_number(&mut ops, layout, page_num, total_pages, page_width_pt);

        for (idx, entry) in entries.iter().enumerate().take(layout.images_per_page) {
            let slot = slot_position(layout, idx);
            let img_path = config.image_path.join(entry.file());

            let thumb = match load_thumbnail(&img_path, cell, layout.thumbnail_dpi) {
                Ok(thumb) => thumb,
                Err(e) => {
                    log::warn!("skipping {}: {}", img_path.display(), e);
                    stats.skipped.push((entry.file().to_string(), e.to_string()));
                    continue;
                }
            };

            place_thumbnail(&mut doc, &mut ops, &thumb, slot, cell);
            draw_caption(&mut ops, layout, &entry.caption(), slot, cell);
            stats.placed += 1;
        }

        doc.pages.push(PdfPage::new(
            Mm::from(Pt(page_width_pt)),
            Mm::from(Pt(page_height_pt)),
            ops,
        ));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok((bytes, stats))
}

/// Decode an image file and rasterize it to a square thumbnail sized for
/// the cell at the configured resolution
fn load_thumbnail(path: &Path, cell_pt: f32, dpi: f32) -> Result<RawImage> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;

    let max_px = (cell_pt * dpi / 72.0).round().max(1.0) as u32;
    let thumb = img.thumbnail(max_px, max_px).to_rgb8();

    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, THUMBNAIL_JPEG_QUALITY);
    encoder.encode_image(&thumb)?;

    let mut warnings = Vec::new();
    RawImage::decode_from_bytes(&jpeg, &mut warnings).map_err(CatalogError::Pdf)
}

fn place_thumbnail(
    doc: &mut PdfDocument,
    ops: &mut Vec<Op>,
    image: &RawImage,
    slot: SlotPosition,
    cell_pt: f32,
) {
    let (w_pt, h_pt) = fit_dimensions(image.width as f32, image.height as f32, cell_pt, cell_pt);
    let image_id = doc.add_image(image);

    ops.push(Op::UseXobject {
        id: image_id,
        transform: XObjectTransform {
            // Centered horizontally in the cell, top edge on the slot line.
            translate_x: Some(Pt(slot.x_pt + (cell_pt - w_pt) / 2.0)),
            translate_y: Some(Pt(slot.top_pt - h_pt)),
            rotate: None,
            scale_x: Some(w_pt / image.width as f32),
            scale_y: Some(h_pt / image.height as f32),
            dpi: Some(72.0),
        },
    });
}

fn draw_header(
    ops: &mut Vec<Op>,
    layout: &CatalogLayout,
    title: &str,
    page_width_pt: f32,
    page_height_pt: f32,
) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(layout.page_margin_pt),
            y: Pt(page_height_pt - layout.page_margin_pt),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font: BuiltinFont::HelveticaBold,
        size: Pt(layout.header_font_size_pt),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(title.to_string())],
        font: BuiltinFont::HelveticaBold,
    });
    ops.push(Op::EndTextSection);

    // Rule line under the header.
    let rule_y = page_height_pt - layout.header_margin_pt + 20.0;
    ops.push(Op::SetOutlineThickness { pt: Pt(1.0) });
    ops.push(Op::DrawLine {
        line: Line {
            points: vec![
                LinePoint {
                    p: Point {
                        x: Pt(layout.page_margin_pt),
                        y: Pt(rule_y),
                    },
                    bezier: false,
                },
                LinePoint {
                    p: Point {
                        x: Pt(page_width_pt - layout.page_margin_pt),
                        y: Pt(rule_y),
                    },
                    bezier: false,
                },
            ],
            is_closed: false,
        },
    });
}

fn draw_page_number(
    ops: &mut Vec<Op>,
    layout: &CatalogLayout,
    page_num: usize,
    total_pages: usize,
    page_width_pt: f32,
) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(page_width_pt / 2.0),
            y: Pt(layout.page_margin_pt / 2.0),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font: BuiltinFont::Helvetica,
        size: Pt(layout.page_number_font_size_pt),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(format!(
            "Page {} of {}",
            page_num + 1,
            total_pages
        ))],
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::EndTextSection);
}

fn draw_caption(
    ops: &mut Vec<Op>,
    layout: &CatalogLayout,
    caption: &str,
    slot: SlotPosition,
    cell_pt: f32,
) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(slot.x_pt),
            y: Pt(slot.top_pt - cell_pt - CAPTION_OFFSET_PT),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font: BuiltinFont::Helvetica,
        size: Pt(layout.caption_font_size_pt),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(caption.to_string())],
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::EndTextSection);
}
