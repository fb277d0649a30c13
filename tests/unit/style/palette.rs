//! Tests for palette contents and orderings

#[cfg(test)]
mod tests {
    use skilleprofil::style::palette::{PALETTE, PALETTE_LR, PALETTE_SIZE, is_muted};

    // Tests both orderings hold the same swatches
    // Verified by replacing one swatch in the left-to-right ordering
    #[test]
    fn test_orderings_share_swatches() {
        let mut primary: Vec<_> = PALETTE.iter().map(|s| s.saturated).collect();
        let mut left_right: Vec<_> = PALETTE_LR.iter().map(|s| s.saturated).collect();
        primary.sort_unstable();
        left_right.sort_unstable();
        assert_eq!(primary, left_right);
        assert_eq!(PALETTE.len(), PALETTE_SIZE);
    }

    // Tests every color is a six-digit hex string
    #[test]
    fn test_colors_are_hex() {
        for swatch in PALETTE.iter().chain(PALETTE_LR.iter()) {
            for color in [swatch.saturated, swatch.muted] {
                assert_eq!(color.len(), 7, "{color}");
                assert!(color.starts_with('#'));
                assert!(color.chars().skip(1).all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    // Tests picking and muted detection
    #[test]
    fn test_pick_and_is_muted() {
        let swatch = PALETTE[0];
        assert_eq!(swatch.pick(true), swatch.muted);
        assert_eq!(swatch.pick(false), swatch.saturated);
        assert!(is_muted(swatch.muted));
        assert!(!is_muted(swatch.saturated));
        assert!(!is_muted("#000000"));
    }
}
