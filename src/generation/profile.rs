//! Attribute sampling and the filtered profile of one artwork

use crate::generation::parameters::ProfileParameters;
use crate::geometry::{Attributes, Canvas, Profile, build_grid};
use crate::io::configuration::NOISE_FREQUENCY;
use crate::math::{Sampler, normalize};

/// Grid after dropping absent cells
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProfile {
    /// Present cells per column
    pub columns: Profile,
    /// Canvas width left over after the last whole column
    pub offset_width: f64,
    /// Length of the longest filtered column
    pub max_rows: usize,
}

impl GeneratedProfile {
    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of present cells across all columns
    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

/// Attribute source drawing from an owned [`Sampler`]
///
/// Samples are drawn in the order the grid builder asks for them, so the
/// sequence is fixed by the seed and the grid shape.
pub struct SampledAttributes<'p> {
    sampler: Sampler,
    parameters: &'p ProfileParameters,
}

impl<'p> SampledAttributes<'p> {
    /// Bind a sampler to the parameter bounds
    pub const fn new(sampler: Sampler, parameters: &'p ProfileParameters) -> Self {
        Self {
            sampler,
            parameters,
        }
    }

    /// Hand the sampler back once the grid is built
    pub fn into_sampler(self) -> Sampler {
        self.sampler
    }
}

impl Attributes for SampledAttributes<'_> {
    fn element_height(&mut self, _col: usize, _row: usize) -> f64 {
        self.sampler.uniform_range(
            self.parameters.element_height_lower_bound,
            self.parameters.element_height_upper_bound,
        )
    }

    // The noise branch scales by the upper bound instead of interpolating
    // between the bounds; stored seeds depend on it.
    #[allow(clippy::suboptimal_flops)]
    fn column_height(&mut self, col: usize) -> f64 {
        let lower = self.parameters.column_height_lower_bound;
        let upper = self.parameters.column_height_upper_bound;

        if self.parameters.noise {
            let sample = self.sampler.noise_2d(col as f64 * NOISE_FREQUENCY, 0.0);
            lower + upper * normalize(-1.0, 1.0, sample)
        } else {
            self.sampler.uniform_range(lower, upper)
        }
    }

    fn scale(&mut self, _col: usize, _row: usize) -> f64 {
        self.sampler.uniform_range(
            self.parameters.scale_lower_bound,
            self.parameters.scale_upper_bound,
        )
    }
}

/// Build and filter the grid for `canvas`
///
/// The sampler is consumed by the attribute source and returned afterwards so
/// color assignment continues the same sequence.
pub fn generate_profile(
    canvas: Canvas,
    sampler: Sampler,
    parameters: &ProfileParameters,
) -> (GeneratedProfile, Sampler) {
    let uniforms = parameters.uniforms();

    let column_count = uniforms.column_count(canvas.width);
    let used_width = column_count as f64 * uniforms.pitch();
    let offset_width = canvas.width - used_width;

    let mut attributes = SampledAttributes::new(sampler, parameters);
    let grid = build_grid(canvas, &uniforms, &mut attributes);

    let columns: Profile = grid
        .into_iter()
        .map(|column| column.into_iter().filter(|cell| cell.is_present()).collect())
        .collect();
    let max_rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    tracing::debug!(
        columns = column_count,
        max_rows,
        offset_width,
        "generated profile grid"
    );

    (
        GeneratedProfile {
            columns,
            offset_width,
            max_rows,
        },
        attributes.into_sampler(),
    )
}
