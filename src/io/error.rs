//! Error types for the file-facing side of artwork generation
//!
//! Generation itself cannot fail; errors only arise when artworks are written,
//! rasterized, or restored from curation records.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all output and record operations
#[derive(Debug)]
pub enum SkilleError {
    /// Artwork has nothing to draw onto
    EmptyArtwork {
        /// Id of the offending artwork
        profile_id: String,
    },

    /// Parameter validation failed at an input boundary
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Curation record could not be parsed
    RecordParse {
        /// Path of the record file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Curation record could not be serialized
    RecordSerialize {
        /// Underlying TOML error
        source: toml::ser::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SkilleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArtwork { profile_id } => {
                write!(f, "Artwork '{profile_id}' has no drawable area")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::RecordParse { path, source } => {
                write!(f, "Failed to parse record '{}': {source}", path.display())
            }
            Self::RecordSerialize { source } => {
                write!(f, "Failed to serialize record: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SkilleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::RecordParse { source, .. } => Some(source),
            Self::RecordSerialize { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::EmptyArtwork { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, SkilleError>;

impl From<std::io::Error> for SkilleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<toml::ser::Error> for SkilleError {
    fn from(err: toml::ser::Error) -> Self {
        Self::RecordSerialize { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SkilleError {
    SkilleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> SkilleError {
    SkilleError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
