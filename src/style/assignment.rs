//! Per-cell color and scale assignment

use crate::generation::parameters::ColorMode;
use crate::geometry::Profile;
use crate::io::configuration::{
    MUTED_COLOR_CHANCE, PERTURBATION_CHANCE, PERTURBATION_DIRECTION_CHANCE, ROW_ALIGNMENT_HEIGHT,
};
use crate::math::{Sampler, clamp, normalize};
use crate::style::palette::{PALETTE, PALETTE_LR, PALETTE_SIZE, Swatch};
use ndarray::Array2;

/// Presentation of one grid position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellStyle {
    /// Fill color as a hex string
    pub color: &'static str,
    /// Scale carried from the profile, zero where no cell exists
    pub scale: f64,
}

/// All position-scoped presentation rules of one artwork
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    /// Unique id scoping every rule
    pub profile_id: String,
    /// Styles indexed `[[col, row]]`, rectangular over the longest column
    pub cells: Array2<CellStyle>,
    /// Downward shift of each column aligning shorter columns to the bottom
    pub column_offsets: Vec<f64>,
}

impl StyleSheet {
    /// Style of the position `(col, row)`, if inside the sheet
    pub fn cell(&self, col: usize, row: usize) -> Option<&CellStyle> {
        self.cells.get((col, row))
    }

    /// Vertical shift of column `col`
    pub fn column_offset(&self, col: usize) -> f64 {
        self.column_offsets.get(col).copied().unwrap_or(0.0)
    }

    /// Number of columns covered
    pub fn column_count(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of rows covered
    pub fn row_count(&self) -> usize {
        self.cells.ncols()
    }
}

/// Palette index centered on the column's share of the grid
///
/// The pivot is nudged one step left or right with [`PERTURBATION_CHANCE`] and
/// clamped to the palette. Both chance samples are always drawn, direction
/// first.
pub fn perturbed_palette_index(sampler: &mut Sampler, col: usize, num_cols: usize) -> usize {
    let share = normalize(0.0, num_cols as f64, col as f64);
    let pivot = (share * PALETTE_SIZE as f64).floor() as i64;

    let direction = sampler.with_chance(PERTURBATION_DIRECTION_CHANCE, -1, 1);
    let delta = sampler.with_chance(PERTURBATION_CHANCE, direction, 0);

    clamp(0, PALETTE_SIZE as i64 - 1, pivot + delta) as usize
}

/// Draw the color of one cell under `mode`
pub fn pick_color(
    sampler: &mut Sampler,
    mode: ColorMode,
    col: usize,
    num_cols: usize,
) -> &'static str {
    let (palette, index) = match mode {
        ColorMode::Random => {
            let index = sampler.uniform_int(0.0, PALETTE_SIZE as f64);
            (&PALETTE, clamp(0, PALETTE_SIZE as i64 - 1, index) as usize)
        }
        ColorMode::LeftRight => (
            &PALETTE_LR,
            perturbed_palette_index(sampler, col, num_cols),
        ),
        ColorMode::Hue => (&PALETTE, perturbed_palette_index(sampler, col, num_cols)),
    };

    let swatch = palette.get(index).copied().unwrap_or(Swatch {
        saturated: "#000000",
        muted: "#000000",
    });
    let muted = sampler.with_chance(MUTED_COLOR_CHANCE, true, false);
    swatch.pick(muted)
}

/// Assign a color and scale to every position of a `num_cols` by
/// `num_rows_max` grid
///
/// Colors are drawn for every position, including those beyond the end of a
/// short column, column by column from the top.
pub fn assign_colors(
    profile_id: &str,
    num_cols: usize,
    num_rows_max: usize,
    sampler: &mut Sampler,
    color_mode: ColorMode,
    profile: &Profile,
) -> StyleSheet {
    let mut cells = Array2::from_elem((num_cols, num_rows_max), CellStyle::default());

    for col in 0..num_cols {
        let column = profile.get(col);
        for row in 0..num_rows_max {
            let color = pick_color(sampler, color_mode, col, num_cols);
            let scale = column
                .and_then(|column_cells| column_cells.get(row))
                .map_or(0.0, |cell| cell.scale);

            if let Some(style) = cells.get_mut((col, row)) {
                *style = CellStyle { color, scale };
            }
        }
    }

    let column_offsets = (0..num_cols)
        .map(|col| {
            let length = profile.get(col).map_or(0, Vec::len);
            (num_rows_max as f64 - length as f64) * ROW_ALIGNMENT_HEIGHT * 0.5
        })
        .collect();

    StyleSheet {
        profile_id: profile_id.to_string(),
        cells,
        column_offsets,
    }
}
