//! Grid tiling for the flat floor view
//!
//! This module turns a single tile photograph into an R x C floor pattern,
//! optionally rotating alternate tiles so the grain alternates like laid
//! flooring.

use crate::options::FloorOptions;
use crate::types::*;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

// =============================================================================
// Grid Composition
// =============================================================================

/// Tile a source image into a grid canvas.
///
/// # Arguments
/// * `tile` - The source tile photograph; resized to `options.tile_size`
/// * `options` - Grid dimensions, rotation pattern and padding
///
/// The canvas is exactly `(cols*tile_size) x (rows*tile_size)`. Padding
/// shifts the origin of inner cells without enlarging the canvas, so with
/// nonzero padding the trailing row/column is clipped at the canvas edge.
pub fn tile_grid(tile: &DynamicImage, options: &FloorOptions) -> Result<RgbImage> {
    options.validate()?;

    let size = options.tile_size;
    let base = tile.to_rgb8();
    let base = if base.dimensions() == (size, size) {
        base
    } else {
        imageops::resize(&base, size, size, FilterType::Triangle)
    };

    // One copy per orientation; placements reference these so rotation
    // never touches the shared source.
    let rotated = options.rotate.then(|| {
        (
            imageops::rotate90(&base),
            imageops::rotate180(&base),
            imageops::rotate270(&base),
        )
    });

    let mut canvas = RgbImage::from_pixel(options.cols * size, options.rows * size, WHITE);

    for row in 0..options.rows {
        for col in 0..options.cols {
            let placed = match &rotated {
                Some((quarter_cw, half, quarter_ccw)) => match pattern_rotation(row, col) {
                    TileRotation::None => &base,
                    TileRotation::Clockwise90 => quarter_cw,
                    TileRotation::Clockwise180 => half,
                    TileRotation::Counterclockwise90 => quarter_ccw,
                },
                None => &base,
            };

            // Padding only between tiles, never before the first row/column.
            let x = col * size + if col > 0 { options.padding * col } else { 0 };
            let y = row * size + if row > 0 { options.padding * row } else { 0 };
            imageops::replace(&mut canvas, placed, x as i64, y as i64);
        }
    }

    Ok(canvas)
}

// =============================================================================
// Tests
// =============================================================================
