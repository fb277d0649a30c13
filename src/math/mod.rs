//! Seeded randomness and numeric helpers

/// Alea pseudo-random generator seeded from strings
pub mod alea;
/// Seeded two-dimensional simplex noise
pub mod noise;
/// Sampling primitives shared by geometry and color assignment
pub mod sampling;

pub use sampling::{Sampler, clamp, normalize};
