//! Seeded generative artwork of sheared quadrilateral columns
//!
//! A profile is a grid of columns of sheared cells whose heights, scales and
//! colors are drawn from a string-seeded generator. The same seed and
//! parameters always produce the same document, so curated artworks can be
//! stored as a seed and regenerated at will.

#![forbid(unsafe_code)]

/// Profile generation pipeline, parameters and artworks
pub mod generation;
/// Cell geometry and grid layout
pub mod geometry;
/// Input/output: SVG and PNG output, curation records, CLI and errors
pub mod io;
/// Seeded randomness, noise and numeric helpers
pub mod math;
/// Palettes and per-cell color assignment
pub mod style;

pub use generation::{Artwork, ColorMode, ProfileParameters, compose_artwork, generate_artwork};
pub use geometry::Canvas;
pub use io::error::{Result, SkilleError};
