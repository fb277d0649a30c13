//! The generation pipeline from seed and parameters to a finished artwork

use crate::generation::parameters::ProfileParameters;
use crate::generation::profile::{GeneratedProfile, generate_profile};
use crate::geometry::Canvas;
use crate::io::configuration::PROFILE_ID_PREFIX;
use crate::io::svg;
use crate::math::Sampler;
use crate::style::{StyleSheet, assign_colors};
use rand::Rng;
use uuid::{Builder, Uuid};

/// Everything produced by one generation, independent of output format
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Seed the artwork was generated from
    pub seed: String,
    /// Id scoping the artwork's style rules
    pub profile_id: String,
    /// Requested drawing area
    pub canvas: Canvas,
    /// Parameters the artwork was generated with
    pub parameters: ProfileParameters,
    /// Filtered cell grid
    pub profile: GeneratedProfile,
    /// Colors, scales and offsets of every position
    pub style: StyleSheet,
}

/// Draw a new seed in UUID format
pub fn fresh_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.random()).into_uuid().to_string()
}

/// Text identifying one generation: the seed, the canvas and every parameter
///
/// Floats use their shortest round-trip form, so equal inputs always give
/// equal text.
fn generation_key(seed: &str, canvas: Canvas, parameters: &ProfileParameters) -> String {
    let ProfileParameters {
        element_width,
        margin,
        angle,
        element_height_lower_bound,
        element_height_upper_bound,
        column_height_lower_bound,
        column_height_upper_bound,
        scale_lower_bound,
        scale_upper_bound,
        color_mode,
        noise,
        edge,
    } = parameters;

    format!(
        "{seed}\n{} {}\n{element_width} {margin} {angle}\n\
         {element_height_lower_bound} {element_height_upper_bound}\n\
         {column_height_lower_bound} {column_height_upper_bound}\n\
         {scale_lower_bound} {scale_upper_bound}\n{color_mode} {noise} {edge:?}",
        canvas.width, canvas.height,
    )
}

/// Stable id for the artwork of `seed` drawn on `canvas` with `parameters`
///
/// Derived from the inputs rather than drawn, so replaying them reproduces the
/// id along with the rest of the document, while the same seed under other
/// parameters gets its own style scope.
pub fn profile_id(seed: &str, canvas: Canvas, parameters: &ProfileParameters) -> String {
    let key = generation_key(seed, canvas, parameters);
    let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes());
    let simple = uuid.simple().to_string();
    let short = simple.get(..8).unwrap_or(&simple);
    format!("{PROFILE_ID_PREFIX}-{short}")
}

/// Resolve the seed to generate with, drawing a fresh one when none is given
pub fn resolve_seed(seed: Option<&str>) -> String {
    match seed {
        Some(seed) if !seed.is_empty() => seed.to_string(),
        _ => fresh_seed(&mut rand::rng()),
    }
}

/// Run the full pipeline
///
/// Returns `None` when the canvas has zero area. Without a seed a fresh one is
/// drawn and stored in the returned artwork.
pub fn compose_artwork(
    canvas: Canvas,
    seed: Option<&str>,
    parameters: &ProfileParameters,
) -> Option<Artwork> {
    if canvas.is_empty() {
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            "zero-area canvas, nothing to generate"
        );
        return None;
    }

    let seed = resolve_seed(seed);
    let profile_id = profile_id(&seed, canvas, parameters);
    tracing::debug!(%seed, %profile_id, color_mode = %parameters.color_mode, "composing artwork");

    let sampler = Sampler::new(&seed);
    let (profile, mut sampler) = generate_profile(canvas, sampler, parameters);

    let style = assign_colors(
        &profile_id,
        profile.column_count(),
        profile.max_rows,
        &mut sampler,
        parameters.color_mode,
        &profile.columns,
    );

    Some(Artwork {
        seed,
        profile_id,
        canvas,
        parameters: parameters.clone(),
        profile,
        style,
    })
}

/// Generate the SVG markup of an artwork
///
/// Returns an empty string when the canvas has zero area.
pub fn generate_artwork(
    canvas: Canvas,
    seed: Option<&str>,
    parameters: &ProfileParameters,
) -> String {
    compose_artwork(canvas, seed, parameters)
        .map(|artwork| svg::serialize(&artwork))
        .unwrap_or_default()
}
