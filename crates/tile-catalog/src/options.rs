use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Catalog page layout configuration
///
/// Distances are in PDF points (1/72 inch), matching the drawing backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogLayout {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Margin around the whole page
    pub page_margin_pt: f32,
    /// Vertical space reserved for the header; image rows start below it
    pub header_margin_pt: f32,
    pub header_font_size_pt: f32,
    /// Vertical space between image rows (leaves room for captions)
    pub row_spacing_pt: f32,
    /// Horizontal space between images in a row
    pub spacing_pt: f32,
    pub images_per_page: usize,
    pub images_per_row: usize,
    pub caption_font_size_pt: f32,
    pub page_number_font_size_pt: f32,
    /// Resolution the thumbnails are rasterized at before embedding
    pub thumbnail_dpi: f32,
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            page_margin_pt: 50.0,
            header_margin_pt: 75.0,
            header_font_size_pt: 14.0,
            row_spacing_pt: 25.0,
            spacing_pt: 10.0,
            images_per_page: 9,
            images_per_row: 3,
            caption_font_size_pt: 10.0,
            page_number_font_size_pt: 8.0,
            thumbnail_dpi: 150.0,
        }
    }
}

impl CatalogLayout {
    /// Load layout from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let layout = serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::Config(format!("Failed to parse layout: {}", e)))?;
        Ok(layout)
    }

    /// Save layout to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("Failed to serialize layout: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the layout
    pub fn validate(&self) -> Result<()> {
        if self.images_per_row == 0 {
            return Err(CatalogError::Config(
                "Layout must place at least one image per row".to_string(),
            ));
        }
        if self.images_per_page < self.images_per_row {
            return Err(CatalogError::Config(
                "images_per_page must be at least images_per_row".to_string(),
            ));
        }
        let (width_pt, _) = self.paper_size.dimensions_pt(self.orientation);
        if 2.0 * self.page_margin_pt >= width_pt {
            return Err(CatalogError::Config(
                "Page margins leave no usable width".to_string(),
            ));
        }
        Ok(())
    }
}
