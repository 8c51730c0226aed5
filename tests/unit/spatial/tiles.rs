//! Tests for 2x2 pixel patterns and pattern families

#[cfg(test)]
mod tests {
    use ndarray::arr2;
    use viscrypt::Ink;
    use viscrypt::spatial::tiles::{
        ANTI_DIAGONAL, BLACK_PATTERNS, DIAGONAL, PatternFamily, PixelPattern,
        RANDOM_BLACK_PATTERNS, WHITE_PATTERNS,
    };

    const B: Ink = Ink::Black;
    const W: Ink = Ink::White;

    // Tests the literal layout of both diagonal tiles
    #[test]
    fn test_diagonal_layouts() {
        assert_eq!(DIAGONAL.rows(), &[[W, B], [B, W]]);
        assert_eq!(ANTI_DIAGONAL.rows(), &[[B, W], [W, B]]);
        assert_eq!(DIAGONAL.black_count(), 2);
        assert_eq!(ANTI_DIAGONAL.black_count(), 2);
    }

    // Tests that the white pair is complementary and overlays to all white
    #[test]
    fn test_white_patterns_are_complementary() {
        let zero = WHITE_PATTERNS.select(false);
        let one = WHITE_PATTERNS.select(true);

        assert_eq!(zero.inverted(), one);
        assert_eq!(zero.overlay(one), PixelPattern::new([[W, W], [W, W]]));
        assert!(!WHITE_PATTERNS.is_degenerate());
    }

    // Tests that both black entries are the diagonal tile regardless of bit
    #[test]
    fn test_black_patterns_are_identical() {
        assert!(BLACK_PATTERNS.is_degenerate());
        assert_eq!(BLACK_PATTERNS.select(false), DIAGONAL);
        assert_eq!(BLACK_PATTERNS.select(true), DIAGONAL);
        assert_eq!(DIAGONAL.overlay(DIAGONAL), DIAGONAL);
    }

    // Tests that the randomized black pair mirrors the white pair
    #[test]
    fn test_random_black_patterns_cover_both_diagonals() {
        assert!(!RANDOM_BLACK_PATTERNS.is_degenerate());
        assert_eq!(RANDOM_BLACK_PATTERNS, WHITE_PATTERNS);
        let custom = PatternFamily::new(ANTI_DIAGONAL, DIAGONAL);
        assert_eq!(custom.select(false), ANTI_DIAGONAL);
    }

    // Tests reading a tile back out of a block view
    #[test]
    fn test_from_block_and_view() {
        let block = arr2(&[[B, W], [W, B]]);

        let pattern = PixelPattern::from_block(&block.view()).unwrap();

        assert_eq!(pattern, ANTI_DIAGONAL);
        assert_eq!(pattern.view(), block.view());

        let too_small = arr2(&[[B, W]]);
        assert!(PixelPattern::from_block(&too_small.view()).is_none());
    }
}
