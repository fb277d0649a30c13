//! Column and grid layout of cells

use crate::geometry::cell::{Cell, build_cell, shear_height};
use crate::io::configuration::{MAX_GRID_CELLS, MAX_GRID_DIMENSION};
use serde::{Deserialize, Serialize};

/// Cells of one column, top to bottom
pub type Column = Vec<Cell>;

/// Columns of the whole grid, left to right, indexed `[col][row]`
pub type Profile = Vec<Column>;

/// Requested drawing area in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent, excluding the document's bottom margin
    pub height: f64,
}

impl Canvas {
    /// Create a canvas of the given size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero, in which case nothing is generated
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Rounding of the fractional column count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRounding {
    /// Only whole columns that fit the canvas
    #[default]
    Floor,
    /// One partial column may overhang the right edge
    Ceil,
}

impl EdgeRounding {
    /// Round a fractional count according to the policy
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
        }
    }
}

/// Geometry shared by every cell of one generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    /// Horizontal extent of a cell
    pub element_width: f64,
    /// Gap between columns and between rows
    pub margin: f64,
    /// Shear angle in degrees
    pub angle: f64,
    /// Rounding of the column count
    pub edge: EdgeRounding,
}

impl Uniforms {
    /// Horizontal distance between neighboring column origins
    pub fn pitch(&self) -> f64 {
        self.element_width + self.margin
    }

    /// Number of columns laid out across `canvas_width`
    pub fn column_count(&self, canvas_width: f64) -> usize {
        bounded_count(self.edge.apply(canvas_width / self.pitch()))
    }

    /// Number of rows generated for a column of `max_height`
    pub fn row_count(&self, max_height: f64) -> usize {
        let shear = shear_height(self.element_width, self.angle);
        bounded_count((max_height / (shear + self.margin)).ceil())
    }

    /// Columns and rows per column of the grid covering `canvas`
    ///
    /// Rows are cut so the grid never holds more than [`MAX_GRID_CELLS`]
    /// cells.
    pub fn grid_shape(&self, canvas: Canvas) -> (usize, usize) {
        let columns = self.column_count(canvas.width);
        let rows = self.row_count(canvas.height);
        (columns, rows.min(MAX_GRID_CELLS / columns.max(1)))
    }
}

/// Per-position sampling of the varying cell attributes
///
/// Calls happen in generation order: `column_height` once per column, then per
/// row `element_height` followed by `scale` only while the column still has
/// room.
pub trait Attributes {
    /// Extra vertical stretch of the cell at `(col, row)`
    fn element_height(&mut self, col: usize, row: usize) -> f64;
    /// Height after which cells of column `col` are absent
    fn column_height(&mut self, col: usize) -> f64;
    /// Scale of the cell at `(col, row)`
    fn scale(&mut self, col: usize, row: usize) -> f64;
}

/// Convert a rounded count into a length, treating NaN, infinities and
/// non-positive values as empty
fn bounded_count(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        (value as usize).min(MAX_GRID_DIMENSION)
    } else {
        0
    }
}

/// Lay out one column of cells
///
/// Cells stack downward from a running offset. Once that offset passes the
/// sampled column height every following cell gets scale zero and the scale
/// sampler is no longer consulted.
pub fn build_column<A: Attributes + ?Sized>(
    col: usize,
    max_height: f64,
    uniforms: &Uniforms,
    attributes: &mut A,
) -> Column {
    layout_column(col, uniforms.row_count(max_height), uniforms, attributes)
}

/// Lay out `rows` cells of column `col`
#[allow(clippy::suboptimal_flops)]
fn layout_column<A: Attributes + ?Sized>(
    col: usize,
    rows: usize,
    uniforms: &Uniforms,
    attributes: &mut A,
) -> Column {
    let Uniforms {
        element_width: width,
        margin,
        angle,
        ..
    } = *uniforms;

    let shear = shear_height(width, angle);
    let mirrored = col % 2 == 0;

    let column_height = attributes.column_height(col);

    let x = width / 2.0 - margin + col as f64 * (width + margin);
    let mut height_so_far = shear - margin;

    (0..rows)
        .map(|row| {
            let extra_height = attributes.element_height(col, row);
            let element_height = extra_height + shear + margin;
            let scale = if height_so_far > column_height {
                0.0
            } else {
                attributes.scale(col, row)
            };

            let center = height_so_far + 0.5 * element_height;
            height_so_far += element_height;

            build_cell(width, extra_height, angle, mirrored, [x, center], scale)
        })
        .collect()
}

/// Lay out every column of the canvas, each bounded by the canvas height
///
/// Every column gets the row count of [`Uniforms::grid_shape`].
pub fn build_grid<A: Attributes + ?Sized>(
    canvas: Canvas,
    uniforms: &Uniforms,
    attributes: &mut A,
) -> Profile {
    let (columns, rows) = uniforms.grid_shape(canvas);
    (0..columns)
        .map(|col| layout_column(col, rows, uniforms, attributes))
        .collect()
}
