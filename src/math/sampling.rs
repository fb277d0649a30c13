//! Uniform sampling primitives over a seeded generator and noise field

use crate::math::alea::Alea;
use crate::math::noise::SimplexNoise;
use num_traits::Float;

/// Seeded sampler owned by a single generation run
///
/// Both sources are seeded from the same string: the same seed always yields
/// the same sequence of samples and the same noise field.
#[derive(Debug, Clone)]
pub struct Sampler {
    random: Alea,
    noise: SimplexNoise,
}

impl Sampler {
    /// Create a sampler for the given seed string
    pub fn new(seed: &str) -> Self {
        Self {
            random: Alea::new(seed),
            noise: SimplexNoise::new(seed),
        }
    }

    /// Uniform sample in [0, 1)
    pub fn uniform(&mut self) -> f64 {
        self.random.next_f64()
    }

    /// Uniform sample between `low` and `high`
    ///
    /// Inverted bounds are not reordered; the sample then lies in `(high, low]`.
    #[allow(clippy::suboptimal_flops)]
    pub fn uniform_range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.uniform()
    }

    /// Floor of [`Sampler::uniform_range`]
    pub fn uniform_int(&mut self, low: f64, high: f64) -> i64 {
        self.uniform_range(low, high).floor() as i64
    }

    /// `when_hit` if a uniform sample is at most `threshold`, else `when_miss`
    ///
    /// Always consumes exactly one sample.
    pub fn with_chance<T>(&mut self, threshold: f64, when_hit: T, when_miss: T) -> T {
        if self.uniform() <= threshold {
            when_hit
        } else {
            when_miss
        }
    }

    /// Coherent noise in [-1, 1]; does not advance the uniform sequence
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.noise.noise_2d(x, y)
    }
}

/// Clamp `value` into `[min, max]`
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Map `value` from `[min, max]` onto `[0, 1]`
///
/// A zero-width range divides by zero and returns a non-finite value.
pub fn normalize<T: Float>(min: T, max: T, value: T) -> T {
    (value - min) / (max - min)
}
