//! Catalog page layout calculation
//!
//! Pure placement math for the thumbnail grid: cell size, slot positions
//! and page chunking. Rendering consumes these rectangles; nothing here
//! touches the PDF backend.

use crate::options::CatalogLayout;

// =============================================================================
// Cell Geometry
// =============================================================================

/// Top-left anchor of a thumbnail slot, in PDF points (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPosition {
    pub x_pt: f32,
    /// Top edge of the image cell; the image hangs below this line
    pub top_pt: f32,
}

/// Square cell side length for the given layout.
///
/// The usable width (page minus margins) is split into `images_per_row`
/// cells with `spacing_pt` between them.
pub fn cell_size_pt(layout: &CatalogLayout) -> f32 {
    let (page_width_pt, _) = layout.paper_size.dimensions_pt(layout.orientation);
    let usable = page_width_pt - 2.0 * layout.page_margin_pt;
    (usable - (layout.images_per_row - 1) as f32 * layout.spacing_pt)
        / layout.images_per_row as f32
}

/// Position of slot `idx` (0-based, row-major) on its page.
pub fn slot_position(layout: &CatalogLayout, idx: usize) -> SlotPosition {
    let (_, page_height_pt) = layout.paper_size.dimensions_pt(layout.orientation);
    let cell = cell_size_pt(layout);

    let col = idx % layout.images_per_row;
    let row = idx / layout.images_per_row;

    SlotPosition {
        x_pt: layout.page_margin_pt + col as f32 * (cell + layout.spacing_pt),
        top_pt: page_height_pt
            - layout.header_margin_pt
            - row as f32 * (cell + layout.row_spacing_pt),
    }
}

/// Number of pages needed for `total_images` at `images_per_page`.
pub fn page_count(total_images: usize, images_per_page: usize) -> usize {
    total_images.div_ceil(images_per_page)
}

/// Scale `(width, height)` to fit inside `(max_width, max_height)`,
/// preserving aspect ratio.
pub fn fit_dimensions(width: f32, height: f32, max_width: f32, max_height: f32) -> (f32, f32) {
    let ratio = width / height;
    if ratio > max_width / max_height {
        (max_width, max_width / ratio)
    } else {
        (max_height * ratio, max_height)
    }
}

// =============================================================================
// Tests
// =============================================================================
