use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed margins removed from the warped floor image to discard the
/// whitespace the perspective transform introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CropMargins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for CropMargins {
    fn default() -> Self {
        // Calibrated for a 20x20 grid of 200 px tiles; treat as layout
        // configuration, not a universal constant.
        Self {
            left: 1100,
            right: 1100,
            top: 2200,
            bottom: 800,
        }
    }
}

impl CropMargins {
    /// True when the margins leave a non-empty region of a `width` x `height` image
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.left + self.right < width && self.top + self.bottom < height
    }
}

/// Floor visualization configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloorOptions {
    /// Number of tile rows in the grid
    pub rows: u32,
    /// Number of tile columns in the grid
    pub cols: u32,
    /// Rotate alternate tiles in the 2x2 brick pattern
    pub rotate: bool,
    /// Space in pixels between tiles (shifts cell origins only; the canvas
    /// keeps its unpadded size and trailing cells clip)
    pub padding: u32,
    /// Side length every tile is resized to before placement
    pub tile_size: u32,
    /// Perspective intensity, clamped into [1.0, 3.0] when applied
    pub depth_factor: f32,
    /// White border added around the grid before warping so the edges
    /// survive resampling
    pub warp_pad: u32,
    /// Post-warp crop margins
    pub crop: CropMargins,
}

impl Default for FloorOptions {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            rotate: false,
            padding: 0,
            tile_size: 200,
            depth_factor: 2.5,
            warp_pad: 10,
            crop: CropMargins::default(),
        }
    }
}

impl FloorOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| VisualError::Config(format!("Failed to parse options: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| VisualError::Config(format!("Failed to serialize options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(VisualError::Config(
                "Grid must have at least one row and one column".to_string(),
            ));
        }
        if self.tile_size == 0 {
            return Err(VisualError::Config(
                "Tile size must be at least 1 pixel".to_string(),
            ));
        }
        Ok(())
    }
}
