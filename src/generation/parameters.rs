//! Immutable parameter set for one generation

use crate::geometry::{EdgeRounding, Uniforms};
use crate::io::configuration::{
    DEFAULT_ANGLE, DEFAULT_COLUMN_HEIGHT_LOWER_BOUND, DEFAULT_COLUMN_HEIGHT_UPPER_BOUND,
    DEFAULT_ELEMENT_HEIGHT_LOWER_BOUND, DEFAULT_ELEMENT_HEIGHT_UPPER_BOUND, DEFAULT_ELEMENT_WIDTH,
    DEFAULT_MARGIN, DEFAULT_SCALE_LOWER_BOUND, DEFAULT_SCALE_UPPER_BOUND,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy distributing palette colors across the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ColorMode {
    /// Any palette entry anywhere
    #[default]
    #[serde(rename = "RANDOM")]
    #[value(name = "random")]
    Random,
    /// Palette follows the column position, left-to-right palette ordering
    #[serde(rename = "LEFTRIGHT")]
    #[value(name = "leftright")]
    LeftRight,
    /// Palette follows the column position, primary palette ordering
    #[serde(rename = "HUE")]
    #[value(name = "hue")]
    Hue,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "RANDOM",
            Self::LeftRight => "LEFTRIGHT",
            Self::Hue => "HUE",
        };
        f.write_str(name)
    }
}

/// Shape and color parameters of an artwork
///
/// Values are taken as given. Inverted bounds, negative widths or angles past
/// 90 degrees produce degenerate geometry but never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileParameters {
    /// Horizontal extent of every cell
    pub element_width: f64,
    /// Gap between columns and rows
    pub margin: f64,
    /// Shear angle in degrees
    pub angle: f64,
    /// Lower bound of the extra height added to each cell
    pub element_height_lower_bound: f64,
    /// Upper bound of the extra height added to each cell
    pub element_height_upper_bound: f64,
    /// Lower bound of the per-column height limit
    pub column_height_lower_bound: f64,
    /// Upper bound of the per-column height limit
    pub column_height_upper_bound: f64,
    /// Lower bound of the per-cell scale
    pub scale_lower_bound: f64,
    /// Upper bound of the per-cell scale
    pub scale_upper_bound: f64,
    /// Palette distribution policy
    pub color_mode: ColorMode,
    /// Sample column heights from coherent noise instead of uniformly
    pub noise: bool,
    /// Rounding of the column count
    pub edge: EdgeRounding,
}

impl Default for ProfileParameters {
    fn default() -> Self {
        Self {
            element_width: DEFAULT_ELEMENT_WIDTH,
            margin: DEFAULT_MARGIN,
            angle: DEFAULT_ANGLE,
            element_height_lower_bound: DEFAULT_ELEMENT_HEIGHT_LOWER_BOUND,
            element_height_upper_bound: DEFAULT_ELEMENT_HEIGHT_UPPER_BOUND,
            column_height_lower_bound: DEFAULT_COLUMN_HEIGHT_LOWER_BOUND,
            column_height_upper_bound: DEFAULT_COLUMN_HEIGHT_UPPER_BOUND,
            scale_lower_bound: DEFAULT_SCALE_LOWER_BOUND,
            scale_upper_bound: DEFAULT_SCALE_UPPER_BOUND,
            color_mode: ColorMode::default(),
            noise: false,
            edge: EdgeRounding::default(),
        }
    }
}

impl ProfileParameters {
    /// Geometry constants shared by all cells
    pub const fn uniforms(&self) -> Uniforms {
        Uniforms {
            element_width: self.element_width,
            margin: self.margin,
            angle: self.angle,
            edge: self.edge,
        }
    }
}
