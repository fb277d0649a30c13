//! Profile generation from seed and parameters

/// Generation pipeline and the artwork it produces
pub mod artwork;
/// Parameter set and color modes
pub mod parameters;
/// Attribute sampling and profile filtering
pub mod profile;

pub use artwork::{Artwork, compose_artwork, generate_artwork};
pub use parameters::{ColorMode, ProfileParameters};
pub use profile::{GeneratedProfile, generate_profile};
