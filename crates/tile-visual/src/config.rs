//! JSON batch descriptors for the floor and wall pipelines

use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One floor visualization in a batch
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloorPage {
    /// Tile image filename, resolved against `FloorConfig::image_path`
    pub file: String,
    /// Title used to name the output files
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotate: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding: u32,
}

/// Batch descriptor for floor visualizations
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloorConfig {
    /// Directory containing the tile images
    pub image_path: PathBuf,
    pub rows: u32,
    pub cols: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_depth_factor"))]
    pub depth_factor: f32,
    pub pages: Vec<FloorPage>,
}

fn default_depth_factor() -> f32 {
    2.5
}

impl FloorConfig {
    /// Load config from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| VisualError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save config to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| VisualError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(VisualError::NoPages);
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(VisualError::Config(
                "Grid must have at least one row and one column".to_string(),
            ));
        }
        Ok(())
    }
}

/// One wall mockup in a batch
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallPage {
    /// Title drawn into the band below the sample grid
    pub title: String,
    /// Directory containing this page's images
    pub path: PathBuf,
    /// One image per row; each is repeated across the columns of its row
    pub images: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_wall_cols"))]
    pub cols: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_wall_padding"))]
    pub padding: u32,
    /// Left inset of the title text and footer strip
    #[cfg_attr(feature = "serde", serde(default = "default_title_padding"))]
    pub title_padding: u32,
    /// Images placed in a bordered strip below the title band
    #[cfg_attr(feature = "serde", serde(default))]
    pub footer: Vec<String>,
}

fn default_wall_cols() -> u32 {
    5
}

fn default_wall_padding() -> u32 {
    3
}

fn default_title_padding() -> u32 {
    30
}

/// Batch descriptor for wall mockups
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallConfig {
    pub output_pdf: PathBuf,
    /// TrueType font used for the title band; the band stays blank when
    /// absent or unreadable
    #[cfg_attr(feature = "serde", serde(default))]
    pub title_font: Option<PathBuf>,
    pub pages: Vec<WallPage>,
}

impl WallConfig {
    /// Load config from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| VisualError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save config to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| VisualError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(VisualError::NoPages);
        }
        for page in &self.pages {
            if page.images.is_empty() {
                return Err(VisualError::Config(format!(
                    "Wall page '{}' has no images",
                    page.title
                )));
            }
            if page.cols == 0 {
                return Err(VisualError::Config(format!(
                    "Wall page '{}' must have at least one column",
                    page.title
                )));
            }
        }
        Ok(())
    }
}
