//! Cell geometry and grid layout
//!
//! Everything here works on plain coordinates and knows nothing about markup.

/// Single cell construction
pub mod cell;
/// Columns and the full grid
pub mod grid;

pub use cell::{Cell, Point, build_cell};
pub use grid::{Attributes, Canvas, Column, EdgeRounding, Profile, Uniforms, build_column, build_grid};
