//! Perspective projection for the angled floor view
//!
//! A fixed four-corner projective transform pulls the top edge of the flat
//! grid inward and down, so the pattern appears to recede away from the
//! viewer. The bottom edge stays at full width.

use crate::options::FloorOptions;
use crate::types::*;
use image::imageops;
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Warp a flat floor image into an angled view and trim the surplus
/// whitespace.
///
/// Recoverable geometry failures (degenerate transform, crop margins that
/// do not fit) fall back to returning the input unchanged.
pub fn apply_perspective(image: &RgbImage, options: &FloorOptions) -> Result<RgbImage> {
    let depth = options.depth_factor.clamp(1.0, 3.0);
    let pad = options.warp_pad;

    // White border so the grid edge survives resampling.
    let (grid_w, grid_h) = image.dimensions();
    let mut padded = RgbImage::from_pixel(grid_w + 2 * pad, grid_h + 2 * pad, WHITE);
    imageops::replace(&mut padded, image, pad as i64, pad as i64);

    let (width, height) = padded.dimensions();
    let (w, h, p) = (width as f32, height as f32, pad as f32);

    let inset = w * 0.15 * depth;
    let drop = h * 0.15 * depth;

    let src = [
        (p, p),         // top-left
        (w - p, p),     // top-right
        (p, h - p),     // bottom-left
        (w - p, h - p), // bottom-right
    ];
    let dst = [
        (p + inset, p + drop),     // top-left moved down and right
        (w - p - inset, p + drop), // top-right moved down and left
        (p, h - p),                // bottom-left unchanged
        (w - p, h - p),            // bottom-right unchanged
    ];

    let Some(projection) = Projection::from_control_points(src, dst) else {
        log::warn!("degenerate perspective transform; returning image unchanged");
        return Ok(image.clone());
    };

    let mut warped = RgbImage::new(width, height);
    warp_into(&padded, &projection, Interpolation::Bilinear, WHITE, &mut warped);

    // Drop the warp pad again.
    let dewarped = imageops::crop_imm(&warped, pad, pad, grid_w, grid_h).to_image();

    let (w, h) = dewarped.dimensions();
    let crop = options.crop;
    if !crop.fits(w, h) {
        log::warn!(
            "crop margins exceed warped image dimensions {}x{}; returning image unchanged",
            w,
            h
        );
        return Ok(image.clone());
    }

    let trimmed = imageops::crop_imm(
        &dewarped,
        crop.left,
        crop.top,
        w - crop.left - crop.right,
        h - crop.top - crop.bottom,
    )
    .to_image();

    Ok(trimmed)
}
