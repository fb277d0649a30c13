//! Tests for generation constants and defaults

#[cfg(test)]
mod tests {
    use skilleprofil::io::configuration::{
        DEFAULT_CANVAS_HEIGHT, DEFAULT_COLUMN_HEIGHT_UPPER_BOUND, DOCUMENT_BOTTOM_MARGIN,
        MAX_GRID_DIMENSION, MUTED_COLOR_CHANCE, NOISE_FREQUENCY, PERTURBATION_CHANCE,
        PERTURBATION_DIRECTION_CHANCE, PROFILE_ID_PREFIX, ROW_ALIGNMENT_HEIGHT, SVG_EXTENSION,
    };

    // Tests the color policy probabilities
    // Verified by changing the muted chance
    #[test]
    fn test_color_policy_values() {
        assert!((MUTED_COLOR_CHANCE - 0.15).abs() < f64::EPSILON);
        assert!((PERTURBATION_CHANCE - 0.33).abs() < f64::EPSILON);
        assert!((PERTURBATION_DIRECTION_CHANCE - 0.5).abs() < f64::EPSILON);
    }

    // Tests layout constants
    #[test]
    fn test_layout_values() {
        assert!((NOISE_FREQUENCY - 0.1).abs() < f64::EPSILON);
        assert!((ROW_ALIGNMENT_HEIGHT - 15.0).abs() < f64::EPSILON);
        assert!((DOCUMENT_BOTTOM_MARGIN - 20.0).abs() < f64::EPSILON);
    }

    // Tests the column height upper bound defaults to the canvas height
    #[test]
    fn test_column_height_default_follows_canvas() {
        assert!((DEFAULT_COLUMN_HEIGHT_UPPER_BOUND - DEFAULT_CANVAS_HEIGHT).abs() < f64::EPSILON);
    }

    // Tests the grid cap value
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
    }

    // Tests the id prefix is a valid CSS identifier start
    #[test]
    fn test_profile_id_prefix() {
        assert!(
            PROFILE_ID_PREFIX
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
        );
        assert!(!SVG_EXTENSION.starts_with('.'));
    }
}
