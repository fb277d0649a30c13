/// Command-line interface and artwork processing
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types for output and record operations
pub mod error;
/// PNG rasterization
pub mod image;
/// Batch progress display
pub mod progress;
/// Curation records
pub mod record;
/// SVG serialization
pub mod svg;
