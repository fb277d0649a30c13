//! Command-line interface for generating, batching and replaying artworks

use crate::generation::artwork::fresh_seed;
use crate::generation::{Artwork, ColorMode, ProfileParameters, compose_artwork};
use crate::geometry::{Canvas, EdgeRounding};
use crate::io::configuration::{
    DEFAULT_ANGLE, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_COLUMN_HEIGHT_LOWER_BOUND,
    DEFAULT_COUNT, DEFAULT_ELEMENT_HEIGHT_LOWER_BOUND, DEFAULT_ELEMENT_HEIGHT_UPPER_BOUND,
    DEFAULT_ELEMENT_WIDTH, DEFAULT_MARGIN, DEFAULT_SCALE_LOWER_BOUND, DEFAULT_SCALE_UPPER_BOUND,
    PNG_EXTENSION, RECORD_EXTENSION, SVG_EXTENSION,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_artwork_as_png;
use crate::io::progress::ProgressManager;
use crate::io::record::{ArtworkRecord, load_record, save_record};
use crate::io::svg;
use clap::{ArgAction, Parser};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "skilleprofil")]
#[command(
    author,
    version,
    about = "Generate seeded skilleProfil artworks as SVG"
)]
/// Command-line arguments for the artwork generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving the generated files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Canvas width
    #[arg(short = 'W', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: f64,

    /// Canvas height
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: f64,

    /// Seed string; a fresh one is drawn when omitted
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Horizontal extent of each cell
    #[arg(long, default_value_t = DEFAULT_ELEMENT_WIDTH, allow_negative_numbers = true)]
    pub element_width: f64,

    /// Gap between columns and rows
    #[arg(long, default_value_t = DEFAULT_MARGIN, allow_negative_numbers = true)]
    pub margin: f64,

    /// Shear angle in degrees
    #[arg(long, default_value_t = DEFAULT_ANGLE, allow_negative_numbers = true)]
    pub angle: f64,

    /// Lower bound of the extra cell height
    #[arg(long, default_value_t = DEFAULT_ELEMENT_HEIGHT_LOWER_BOUND, allow_negative_numbers = true)]
    pub element_height_min: f64,

    /// Upper bound of the extra cell height
    #[arg(long, default_value_t = DEFAULT_ELEMENT_HEIGHT_UPPER_BOUND, allow_negative_numbers = true)]
    pub element_height_max: f64,

    /// Lower bound of the column height limit
    #[arg(long, default_value_t = DEFAULT_COLUMN_HEIGHT_LOWER_BOUND, allow_negative_numbers = true)]
    pub column_height_min: f64,

    /// Upper bound of the column height limit (defaults to the canvas height)
    #[arg(long, allow_negative_numbers = true)]
    pub column_height_max: Option<f64>,

    /// Lower bound of the cell scale
    #[arg(long, default_value_t = DEFAULT_SCALE_LOWER_BOUND, allow_negative_numbers = true)]
    pub scale_min: f64,

    /// Upper bound of the cell scale
    #[arg(long, default_value_t = DEFAULT_SCALE_UPPER_BOUND, allow_negative_numbers = true)]
    pub scale_max: f64,

    /// Palette distribution policy
    #[arg(short, long, value_enum, default_value_t = ColorMode::Random)]
    pub color_mode: ColorMode,

    /// Vary column heights smoothly with coherent noise
    #[arg(long)]
    pub noise: bool,

    /// Rounding of the column count
    #[arg(long, value_enum, default_value_t = EdgeRounding::Floor)]
    pub edge: EdgeRounding,

    /// Number of artworks to generate, each with a fresh seed
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seed for drawing the batch's artwork seeds reproducibly
    #[arg(long)]
    pub batch_seed: Option<u64>,

    /// Also write a PNG rendering of each artwork
    #[arg(short, long)]
    pub png: bool,

    /// Write a curation record next to each artwork
    #[arg(short, long)]
    pub record: bool,

    /// Regenerate the artwork described by a curation record
    #[arg(long, value_name = "RECORD", conflicts_with = "seed")]
    pub replay: Option<PathBuf>,

    /// Print the SVG markup instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Canvas requested on the command line
    pub const fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Parameter set assembled from the flags
    pub fn parameters(&self) -> ProfileParameters {
        ProfileParameters {
            element_width: self.element_width,
            margin: self.margin,
            angle: self.angle,
            element_height_lower_bound: self.element_height_min,
            element_height_upper_bound: self.element_height_max,
            column_height_lower_bound: self.column_height_min,
            column_height_upper_bound: self.column_height_max.unwrap_or(self.height),
            scale_lower_bound: self.scale_min,
            scale_upper_bound: self.scale_max,
            color_mode: self.color_mode,
            noise: self.noise,
            edge: self.edge,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.stdout
    }

    /// Default log filter directive for the chosen verbosity
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Inputs of one artwork to generate
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Requested drawing area
    pub canvas: Canvas,
    /// Seed string
    pub seed: String,
    /// Shape and color parameters
    pub parameters: ProfileParameters,
}

/// Orchestrates generation and output of one or more artworks
pub struct ArtworkProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ArtworkProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested artwork and write its outputs
    ///
    /// Returns the paths of the written SVG files.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are inconsistent, a replay record
    /// cannot be loaded, or an output cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let jobs = self.jobs()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        let mut written = Vec::new();
        for job in &jobs {
            let Some(artwork) = compose_artwork(job.canvas, Some(&job.seed), &job.parameters)
            else {
                tracing::warn!(
                    width = job.canvas.width,
                    height = job.canvas.height,
                    "canvas has zero area, nothing to write"
                );
                continue;
            };

            if let Some(path) = self.emit(&artwork)? {
                written.push(path);
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_artwork(&artwork.profile_id);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Resolve the command line into the list of artworks to generate
    ///
    /// # Errors
    ///
    /// Returns an error if the count is zero, a fixed seed is combined with a
    /// batch, or the replay record cannot be loaded
    pub fn jobs(&self) -> Result<Vec<Job>> {
        if let Some(ref record_path) = self.cli.replay {
            let record = load_record(record_path)?;
            tracing::debug!(seed = %record.seed, path = %record_path.display(), "replaying record");
            return Ok(vec![Job {
                canvas: record.canvas,
                seed: record.seed,
                parameters: record.parameters,
            }]);
        }

        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one artwork must be requested",
            ));
        }

        let canvas = self.cli.canvas();
        let parameters = self.cli.parameters();

        if let Some(ref seed) = self.cli.seed {
            if self.cli.count > 1 {
                return Err(invalid_parameter(
                    "count",
                    &self.cli.count,
                    &"a fixed seed always yields the same artwork; drop --seed for batches",
                ));
            }
            return Ok(vec![Job {
                canvas,
                seed: seed.clone(),
                parameters,
            }]);
        }

        let mut rng = self
            .cli
            .batch_seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

        Ok((0..self.cli.count)
            .map(|_| Job {
                canvas,
                seed: fresh_seed(&mut rng),
                parameters: parameters.clone(),
            })
            .collect())
    }

    // Allow print for emitting markup on standard output
    #[allow(clippy::print_stdout)]
    fn emit(&self, artwork: &Artwork) -> Result<Option<PathBuf>> {
        let markup = svg::serialize(artwork);

        if self.cli.stdout {
            println!("{markup}");
            return Ok(None);
        }

        std::fs::create_dir_all(&self.cli.output)
            .map_err(|e| file_system_error(&self.cli.output, "create directory", e))?;

        let svg_path = Self::output_path(&self.cli.output, &artwork.profile_id, SVG_EXTENSION);
        std::fs::write(&svg_path, markup)
            .map_err(|e| file_system_error(&svg_path, "write artwork", e))?;
        tracing::info!(seed = %artwork.seed, path = %svg_path.display(), "wrote artwork");

        if self.cli.png {
            let png_path = Self::output_path(&self.cli.output, &artwork.profile_id, PNG_EXTENSION);
            export_artwork_as_png(artwork, &png_path)?;
            tracing::info!(path = %png_path.display(), "wrote raster");
        }

        if self.cli.record {
            let record_path =
                Self::output_path(&self.cli.output, &artwork.profile_id, RECORD_EXTENSION);
            save_record(&ArtworkRecord::from_artwork(artwork), &record_path)?;
            tracing::info!(path = %record_path.display(), "wrote record");
        }

        Ok(Some(svg_path))
    }

    /// Path of the `extension` output for `profile_id` inside `directory`
    pub fn output_path(directory: &Path, profile_id: &str, extension: &str) -> PathBuf {
        directory.join(format!("{profile_id}.{extension}"))
    }
}
