//! Fixed color palettes
//!
//! Each entry pairs a saturated color with a muted tint of it. The two
//! orderings hold the same swatches arranged differently, so position-driven
//! color modes sweep through them in a different sequence.

/// A saturated color and its muted background tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Full-strength color
    pub saturated: &'static str,
    /// Light tint used for sparse accents
    pub muted: &'static str,
}

impl Swatch {
    const fn new(saturated: &'static str, muted: &'static str) -> Self {
        Self { saturated, muted }
    }

    /// Pick the muted or the saturated color
    pub const fn pick(self, muted: bool) -> &'static str {
        if muted { self.muted } else { self.saturated }
    }
}

const BURGUNDY: Swatch = Swatch::new("#990014", "#EBCCD0");
const ORCHID: Swatch = Swatch::new("#d94abf", "#f5d2ef");
const SCARLET: Swatch = Swatch::new("#e51c30", "#f8c6cb");
const LIME: Swatch = Swatch::new("#a5cd39", "#e1efbe");
const FOREST: Swatch = Swatch::new("#3d8704", "#d8e7cd");
const AMBER: Swatch = Swatch::new("#f0b618", "#fae7b3");
const TEAL: Swatch = Swatch::new("#24b38c", "#bde8dc");
const SKY: Swatch = Swatch::new("#00b8f1", "#abe8fa");
const NAVY: Swatch = Swatch::new("#005799", "#ccddeb");

/// Number of entries in each palette ordering
pub const PALETTE_SIZE: usize = 11;

/// Primary ordering, roughly by hue
pub const PALETTE: [Swatch; PALETTE_SIZE] = [
    ORCHID, SCARLET, SCARLET, BURGUNDY, AMBER, LIME, FOREST, TEAL, SKY, SKY, NAVY,
];

/// Ordering used by the left-to-right color mode
pub const PALETTE_LR: [Swatch; PALETTE_SIZE] = [
    BURGUNDY, ORCHID, FOREST, SCARLET, SCARLET, LIME, AMBER, TEAL, SKY, SKY, NAVY,
];

/// Whether `color` is the muted tint of some palette entry
pub fn is_muted(color: &str) -> bool {
    PALETTE.iter().any(|swatch| swatch.muted == color)
}
