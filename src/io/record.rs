//! Curation records: the seed, canvas and parameters of an artwork on disk
//!
//! A record is enough to regenerate its artwork byte for byte.

use crate::generation::{Artwork, ProfileParameters, compose_artwork};
use crate::geometry::Canvas;
use crate::io::error::{Result, SkilleError, file_system_error};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable description of one artwork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    /// Seed string the artwork was generated from
    pub seed: String,
    /// Requested drawing area
    pub canvas: Canvas,
    /// Shape and color parameters
    #[serde(default)]
    pub parameters: ProfileParameters,
}

impl ArtworkRecord {
    /// Capture the inputs of a composed artwork
    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            seed: artwork.seed.clone(),
            canvas: artwork.canvas,
            parameters: artwork.parameters.clone(),
        }
    }

    /// Regenerate the artwork described by this record
    ///
    /// Returns `None` for a zero-area canvas.
    pub fn replay(&self) -> Option<Artwork> {
        compose_artwork(self.canvas, Some(&self.seed), &self.parameters)
    }

    /// Parse a record from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid record; `path` is only used
    /// for the error message.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| SkilleError::RecordParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Render the record as TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Write a record to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if serialization or any file system operation fails
pub fn save_record(record: &ArtworkRecord, path: &Path) -> Result<()> {
    let text = record.to_toml()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    std::fs::write(path, text).map_err(|e| file_system_error(path, "write record", e))
}

/// Read a record from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid record
pub fn load_record(path: &Path) -> Result<ArtworkRecord> {
    let text = std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read record", e))?;
    ArtworkRecord::from_toml(&text, path)
}
