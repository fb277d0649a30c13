//! Sheared quadrilateral cells, the visual unit of a profile

use serde::{Deserialize, Serialize};

/// A point in canvas units
pub type Point = [f64; 2];

/// One quadrilateral of the grid
///
/// Vertices are relative to the cell center; `translate` places the center on
/// the canvas. A `scale` of zero or below marks the cell as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Corner points in drawing order
    pub vertices: [Point; 4],
    /// Offset of the cell center
    pub translate: Point,
    /// Visual scale around the cell center
    pub scale: f64,
}

impl Cell {
    /// Whether the cell takes part in rendering and sizing
    pub fn is_present(&self) -> bool {
        self.scale > 0.0
    }
}

/// Degrees to radians, computed as `deg / 180 * pi`
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * std::f64::consts::PI
}

/// Vertical rise of a cell edge of `width` sheared by `angle` degrees
pub fn shear_height(width: f64, angle: f64) -> f64 {
    width * degrees_to_radians(angle).sin()
}

/// Build one cell
///
/// The left and right edges are vertical and `width` apart; the top and bottom
/// edges are sheared by `angle`, and `extra_height` stretches the cell
/// vertically. `mirrored` flips the shear direction by negating every x.
pub fn build_cell(
    width: f64,
    extra_height: f64,
    angle: f64,
    mirrored: bool,
    translate: Point,
    scale: f64,
) -> Cell {
    let base_height = 2.0 * shear_height(width, angle);
    let half_width = width / 2.0;
    let half_extra = extra_height / 2.0;

    let left = 0.0 - half_width;
    let right = 0.0 + half_width;

    let mut vertices = [
        [left, 0.0 - half_extra],
        [right, 0.0 - base_height / 2.0 - half_extra],
        [right, 0.0 - half_extra + extra_height],
        [left, 0.0 + base_height / 2.0 + half_extra],
    ];

    if mirrored {
        for vertex in &mut vertices {
            vertex[0] = -vertex[0];
        }
    }

    Cell {
        vertices,
        translate,
        scale,
    }
}
