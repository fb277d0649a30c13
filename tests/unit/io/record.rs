//! Tests for curation records

#[cfg(test)]
mod tests {
    use skilleprofil::geometry::EdgeRounding;
    use skilleprofil::io::record::{ArtworkRecord, load_record, save_record};
    use skilleprofil::io::svg;
    use skilleprofil::{Canvas, ColorMode, ProfileParameters, SkilleError, compose_artwork};
    use std::path::Path;
    use tempfile::TempDir;

    fn curated_parameters() -> ProfileParameters {
        ProfileParameters {
            element_height_lower_bound: 2.0,
            element_height_upper_bound: 12.0,
            column_height_lower_bound: 60.0,
            column_height_upper_bound: 180.0,
            scale_lower_bound: 0.6,
            color_mode: ColorMode::LeftRight,
            noise: true,
            edge: EdgeRounding::Ceil,
            ..ProfileParameters::default()
        }
    }

    // Tests a record written to disk replays the identical document
    // Verified by dropping the noise flag from the record
    #[test]
    fn test_record_round_trip_replays_artwork() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("curated.toml");
        let artwork =
            compose_artwork(Canvas::new(640.0, 200.0), Some("curated"), &curated_parameters())
                .unwrap();

        save_record(&ArtworkRecord::from_artwork(&artwork), &path).unwrap();
        let record = load_record(&path).unwrap();

        assert_eq!(record.seed, "curated");
        assert_eq!(record.parameters, curated_parameters());
        let replayed = record.replay().unwrap();
        assert_eq!(svg::serialize(&replayed), svg::serialize(&artwork));
    }

    // Tests the TOML text uses the upper-case color mode names
    #[test]
    fn test_record_text() {
        let artwork =
            compose_artwork(Canvas::new(640.0, 200.0), Some("curated"), &curated_parameters())
                .unwrap();
        let text = ArtworkRecord::from_artwork(&artwork).to_toml().unwrap();

        assert!(text.contains("seed = \"curated\""));
        assert!(text.contains("color_mode = \"LEFTRIGHT\""));
        assert!(text.contains("edge = \"ceil\""));
    }

    // Tests omitted parameters fall back to defaults
    #[test]
    fn test_record_defaults() {
        let text = "seed = \"minimal\"\n\n[canvas]\nwidth = 400.0\nheight = 150.0\n";
        let record = ArtworkRecord::from_toml(text, Path::new("minimal.toml")).unwrap();

        assert_eq!(record.canvas, Canvas::new(400.0, 150.0));
        assert_eq!(record.parameters, ProfileParameters::default());
    }

    // Tests a partial parameter table keeps the given values
    #[test]
    fn test_record_partial_parameters() {
        let text = "seed = \"partial\"\n\n[canvas]\nwidth = 400.0\nheight = 150.0\n\n[parameters]\ncolor_mode = \"HUE\"\nangle = 30.0\n";
        let record = ArtworkRecord::from_toml(text, Path::new("partial.toml")).unwrap();

        assert_eq!(record.parameters.color_mode, ColorMode::Hue);
        assert!((record.parameters.angle - 30.0).abs() < f64::EPSILON);
        assert!((record.parameters.margin - ProfileParameters::default().margin).abs() < f64::EPSILON);
    }

    // Tests malformed records report the file they came from
    #[test]
    fn test_record_parse_error() {
        let result = ArtworkRecord::from_toml("seed = 3", Path::new("broken.toml"));
        match result {
            Err(SkilleError::RecordParse { path, .. }) => assert_eq!(path, Path::new("broken.toml")),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    // Tests loading a missing file is a file system error
    #[test]
    fn test_load_missing_record() {
        let dir = TempDir::new().unwrap();
        let result = load_record(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(SkilleError::FileSystem { .. })));
    }

    // Tests a zero-area record replays to nothing
    #[test]
    fn test_replay_zero_area() {
        let record = ArtworkRecord {
            seed: "flat".to_string(),
            canvas: Canvas::new(400.0, 0.0),
            parameters: ProfileParameters::default(),
        };
        assert!(record.replay().is_none());
    }
}
