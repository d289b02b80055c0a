//! Floor visualization pipeline
//!
//! This module orchestrates floor generation:
//! 1. Load the tile photograph
//! 2. Tile it into a flat top view
//! 3. Warp the grid through the perspective transform
//! 4. Write both views as JPEG

mod grid;
mod perspective;

pub use grid::tile_grid;
pub use perspective::apply_perspective;

use crate::config::FloorConfig;
use crate::io::{load_image, save_jpeg};
use crate::options::FloorOptions;
use crate::report::BatchReport;
use crate::types::*;
use image::{DynamicImage, RgbImage};
use std::path::Path;

const JPEG_QUALITY: u8 = 75;

/// Generate the warped floor view for a single tile image
pub async fn generate_floor(tile: &DynamicImage, options: &FloorOptions) -> Result<RgbImage> {
    options.validate()?;

    let tile = tile.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        let flat = tile_grid(&tile, &options)?;
        apply_perspective(&flat, &options)
    })
    .await?
}

/// Run a batch of floor visualizations described by a JSON config.
///
/// Writes `<stem>_top.jpg` (flat view) and `<stem>_prep.jpg` (angled view)
/// into `out_dir` for every page. A tile that fails to load is fatal and
/// aborts the whole batch.
pub async fn run_batch(config: &FloorConfig, out_dir: impl AsRef<Path>) -> Result<BatchReport> {
    config.validate()?;

    let out_dir = out_dir.as_ref();
    let mut report = BatchReport::new();

    for page in &config.pages {
        let in_file = config.image_path.join(&page.file);
        let stem = Path::new(&page.file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| page.file.clone());

        log::info!("processing floor page '{}' from {}", page.title, in_file.display());

        let tile = load_image(&in_file).await?;

        let options = FloorOptions {
            rows: config.rows,
            cols: config.cols,
            rotate: page.rotate,
            padding: page.padding,
            depth_factor: config.depth_factor,
            ..Default::default()
        };
        options.validate()?;

        let (flat, warped) = {
            let tile = tile.clone();
            let options = options.clone();
            tokio::task::spawn_blocking(move || {
                let flat = tile_grid(&tile, &options)?;
                let warped = apply_perspective(&flat, &options)?;
                Ok::<_, VisualError>((flat, warped))
            })
            .await??
        };

        let top_path = out_dir.join(format!("{stem}_top.jpg"));
        save_jpeg(flat, &top_path, JPEG_QUALITY).await?;

        let prep_path = out_dir.join(format!("{stem}_prep.jpg"));
        save_jpeg(warped, &prep_path, JPEG_QUALITY).await?;

        report.rendered(page.title.clone(), prep_path);
    }

    Ok(report)
}
