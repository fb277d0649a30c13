//! Generation constants and runtime configuration defaults

// Default artwork parameters
/// Default canvas width
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
/// Default canvas height
pub const DEFAULT_CANVAS_HEIGHT: f64 = 200.0;
/// Default horizontal extent of a cell
pub const DEFAULT_ELEMENT_WIDTH: f64 = 32.0;
/// Default gap between columns and rows
pub const DEFAULT_MARGIN: f64 = 5.0;
/// Default shear angle in degrees
pub const DEFAULT_ANGLE: f64 = 24.0;
/// Default lower bound of the extra cell height
pub const DEFAULT_ELEMENT_HEIGHT_LOWER_BOUND: f64 = 0.0;
/// Default upper bound of the extra cell height
pub const DEFAULT_ELEMENT_HEIGHT_UPPER_BOUND: f64 = 0.0;
/// Default lower bound of the column height limit
pub const DEFAULT_COLUMN_HEIGHT_LOWER_BOUND: f64 = 200.0;
/// Default upper bound of the column height limit (the default canvas height)
pub const DEFAULT_COLUMN_HEIGHT_UPPER_BOUND: f64 = DEFAULT_CANVAS_HEIGHT;
/// Default lower bound of the cell scale
pub const DEFAULT_SCALE_LOWER_BOUND: f64 = 1.0;
/// Default upper bound of the cell scale
pub const DEFAULT_SCALE_UPPER_BOUND: f64 = 1.0;

// Color policy
/// Chance that a cell takes the muted tint of its swatch
pub const MUTED_COLOR_CHANCE: f64 = 0.15;
/// Chance that a position-driven palette index is nudged off its pivot
pub const PERTURBATION_CHANCE: f64 = 0.33;
/// Chance that a nudge goes left rather than right
pub const PERTURBATION_DIRECTION_CHANCE: f64 = 0.5;

// Layout
/// Noise-space step between neighboring columns
pub const NOISE_FREQUENCY: f64 = 0.1;
/// Nominal row height used to bottom-align columns of different lengths
pub const ROW_ALIGNMENT_HEIGHT: f64 = 15.0;
/// Extra document height below the canvas
pub const DOCUMENT_BOTTOM_MARGIN: f64 = 20.0;
/// Prefix of every profile id
pub const PROFILE_ID_PREFIX: &str = "profil";

// Safety limit to prevent excessive memory allocation on degenerate input
/// Maximum number of columns, and of rows per column
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum number of cells in one grid; rows are cut to fit the column count
pub const MAX_GRID_CELLS: usize = 250_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Batch settings
/// Default number of artworks generated per invocation
pub const DEFAULT_COUNT: usize = 1;

// Output settings
/// Extension of vector output files
pub const SVG_EXTENSION: &str = "svg";
/// Extension of raster output files
pub const PNG_EXTENSION: &str = "png";
/// Extension of curation record files
pub const RECORD_EXTENSION: &str = "toml";
