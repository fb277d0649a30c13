//! Palettes and color-mode policies

/// Per-cell color and scale assignment
pub mod assignment;
/// Fixed palettes of saturated and muted colors
pub mod palette;

pub use assignment::{CellStyle, StyleSheet, assign_colors};
