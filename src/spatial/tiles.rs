//! Fixed 2x2 sub-pixel patterns used for pixel expansion
//!
//! Each source pixel becomes one [`PixelPattern`] in every share. Patterns
//! come in pairs ([`PatternFamily`]) indexed by a single random bit.

use ndarray::{ArrayView2, aview2};

use crate::spatial::ink::Ink;

const B: Ink = Ink::Black;
const W: Ink = Ink::White;

/// A 2x2 tile of two-tone cells, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPattern([[Ink; 2]; 2]);

/// White on the main diagonal: `[[W, B], [B, W]]`
pub const DIAGONAL: PixelPattern = PixelPattern([[W, B], [B, W]]);

/// White on the anti-diagonal: `[[B, W], [W, B]]`
pub const ANTI_DIAGONAL: PixelPattern = PixelPattern([[B, W], [W, B]]);

/// Complementary pair used for white source pixels
pub const WHITE_PATTERNS: PatternFamily = PatternFamily::new(DIAGONAL, ANTI_DIAGONAL);

/// Pair used for black source pixels; both entries are the same tile
pub const BLACK_PATTERNS: PatternFamily = PatternFamily::new(DIAGONAL, DIAGONAL);

/// Black-pixel pair for the randomized variant, mirroring the white pair
pub const RANDOM_BLACK_PATTERNS: PatternFamily = PatternFamily::new(DIAGONAL, ANTI_DIAGONAL);

impl PixelPattern {
    /// Create a pattern from its two rows
    pub const fn new(rows: [[Ink; 2]; 2]) -> Self {
        Self(rows)
    }

    /// Read a pattern out of a 2x2 block view
    ///
    /// Returns `None` if the view is smaller than 2x2.
    pub fn from_block(block: &ArrayView2<'_, Ink>) -> Option<Self> {
        let cell = |row: usize, col: usize| block.get((row, col)).copied();
        Some(Self([
            [cell(0, 0)?, cell(0, 1)?],
            [cell(1, 0)?, cell(1, 1)?],
        ]))
    }

    /// The pattern's rows
    pub const fn rows(&self) -> &[[Ink; 2]; 2] {
        &self.0
    }

    /// The same tile with black and white swapped
    pub const fn inverted(self) -> Self {
        let [[a, b], [c, d]] = self.0;
        Self([
            [a.inverted(), b.inverted()],
            [c.inverted(), d.inverted()],
        ])
    }

    /// Cell-wise overlay of two tiles
    pub const fn overlay(self, other: Self) -> Self {
        let [[a, b], [c, d]] = self.0;
        let [[e, f], [g, h]] = other.0;
        Self([
            [a.overlay(e), b.overlay(f)],
            [c.overlay(g), d.overlay(h)],
        ])
    }

    /// Number of black cells in the tile
    pub fn black_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&ink| ink == Ink::Black).count()
    }

    /// View the tile as a 2x2 array for block assignment
    pub fn view(&self) -> ArrayView2<'_, Ink> {
        aview2(self.0.as_slice())
    }
}

/// Two patterns selected between by a random bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternFamily {
    patterns: [PixelPattern; 2],
}

impl PatternFamily {
    /// Create a family from the patterns chosen for bit 0 and bit 1
    pub const fn new(zero: PixelPattern, one: PixelPattern) -> Self {
        Self {
            patterns: [zero, one],
        }
    }

    /// Pattern for a drawn bit (`false` = 0, `true` = 1)
    pub const fn select(&self, bit: bool) -> PixelPattern {
        let [zero, one] = self.patterns;
        if bit { one } else { zero }
    }

    /// Whether both entries are the same tile
    pub fn is_degenerate(&self) -> bool {
        let [zero, one] = self.patterns;
        zero == one
    }
}
