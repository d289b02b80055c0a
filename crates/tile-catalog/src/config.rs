//! Catalog content descriptors

use crate::types::*;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One catalog slot: either a bare filename or a filename with a caption
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum CatalogEntry {
    File(String),
    Titled { file: String, title: Option<String> },
}

impl CatalogEntry {
    pub fn file(&self) -> &str {
        match self {
            CatalogEntry::File(file) => file,
            CatalogEntry::Titled { file, .. } => file,
        }
    }

    /// Caption shown under the image; defaults to the file stem
    pub fn caption(&self) -> String {
        match self {
            CatalogEntry::Titled {
                title: Some(title), ..
            } => title.clone(),
            _ => Path::new(self.file())
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.file().to_string()),
        }
    }
}

/// Catalog content: a title plus pre-chunked pages of image entries
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogConfig {
    pub title: String,
    /// Directory the entry filenames are resolved against
    pub image_path: PathBuf,
    pub output_pdf: PathBuf,
    pub pages: Vec<Vec<CatalogEntry>>,
}

impl CatalogConfig {
    /// Load config from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save config to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Build a catalog by scanning a directory for images.
    ///
    /// Picks up `.jpg`/`.jpeg`/`.png` files, sorted by name, chunked into
    /// pages of `images_per_page`.
    pub async fn from_image_dir(
        dir: impl AsRef<std::path::Path>,
        title: impl Into<String>,
        output_pdf: impl Into<PathBuf>,
        images_per_page: usize,
    ) -> Result<Self> {
        let dir = dir.as_ref().to_owned();

        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let lower = name.to_lowercase();
            if lower.ends_with(".jpg") || lower.ends_with(".jpeg") || lower.ends_with(".png") {
                files.push(name);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(CatalogError::Config(format!(
                "No images found in {}",
                dir.display()
            )));
        }
        if images_per_page == 0 {
            return Err(CatalogError::Config(
                "images_per_page must be at least 1".to_string(),
            ));
        }

        let pages = files
            .chunks(images_per_page)
            .map(|chunk| chunk.iter().cloned().map(CatalogEntry::File).collect())
            .collect();

        Ok(Self {
            title: title.into(),
            image_path: dir,
            output_pdf: output_pdf.into(),
            pages,
        })
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(CatalogError::NoPages);
        }
        if self.pages.iter().any(|page| page.is_empty()) {
            return Err(CatalogError::Config(
                "Catalog pages must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
