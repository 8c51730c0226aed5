//! Share generation by 2x2 pixel expansion
//!
//! Every source pixel draws one bit and expands into a tile in each share:
//! - White pixels get complementary tiles, so the overlay is all white
//! - Black pixels get the same tile in both shares, so the overlay keeps
//!   that tile's two black cells
//!
//! Under [`Scheme::FixedBlack`] the black tile never depends on the drawn bit,
//! which makes a single share's tile distribution differ between black and
//! white regions. [`Scheme::RandomBlack`] removes that dependence.

use clap::ValueEnum;
use ndarray::{Array2, Zip};
use tracing::debug;

use crate::algorithm::bits::BitSource;
use crate::algorithm::reconstruct::reconstruct;
use crate::io::configuration::PIXEL_EXPANSION;
use crate::io::error::{Result, invalid_image_data};
use crate::spatial::grid::{ReconstructedImage, Share, TwoToneImage};
use crate::spatial::ink::Ink;
use crate::spatial::tiles::{
    BLACK_PATTERNS, PatternFamily, PixelPattern, RANDOM_BLACK_PATTERNS, WHITE_PATTERNS,
};

/// Choice of black-pixel patterns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    /// Black pixels always use the same diagonal tile
    #[default]
    FixedBlack,
    /// Black pixels pick one of two complementary tiles at random
    RandomBlack,
}

impl Scheme {
    /// Pattern family used for black source pixels
    pub const fn black_patterns(self) -> PatternFamily {
        match self {
            Self::FixedBlack => BLACK_PATTERNS,
            Self::RandomBlack => RANDOM_BLACK_PATTERNS,
        }
    }
}

/// Tiles written to the first and second share for one source pixel
pub const fn tile_pair(ink: Ink, bit: bool, scheme: Scheme) -> (PixelPattern, PixelPattern) {
    match ink {
        Ink::White => (WHITE_PATTERNS.select(bit), WHITE_PATTERNS.select(!bit)),
        Ink::Black => {
            let tile = scheme.black_patterns().select(bit);
            (tile, tile)
        }
    }
}

/// The two shares produced from one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePair {
    /// First share
    pub first: Share,
    /// Second share
    pub second: Share,
}

impl SharePair {
    /// Overlay both shares
    ///
    /// # Errors
    ///
    /// Returns an error if the shares differ in shape, which cannot happen for
    /// pairs produced by [`ShareGenerator`].
    pub fn reconstruct(&self) -> Result<ReconstructedImage> {
        reconstruct(&self.first, &self.second)
    }
}

/// Splits two-tone images into share pairs
#[derive(Debug, Clone)]
pub struct ShareGenerator<S> {
    bits: S,
    scheme: Scheme,
}

impl<S: BitSource> ShareGenerator<S> {
    /// Create a generator drawing from the given bit source
    pub fn new(bits: S) -> Self {
        Self {
            bits,
            scheme: Scheme::default(),
        }
    }

    /// Use a different black-pixel scheme
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Scheme in use
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Recover the bit source
    pub fn into_bits(self) -> S {
        self.bits
    }

    /// Split a secret into two shares at twice its resolution
    ///
    /// Bits are drawn in row-major order, one per source pixel, whatever its
    /// colour.
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::InvalidImageData`](crate::CryptError::InvalidImageData)
    /// if the secret has an empty dimension or the expanded size overflows.
    pub fn generate(&mut self, secret: &TwoToneImage) -> Result<SharePair> {
        let (rows, cols) = secret.dimensions();
        if rows == 0 || cols == 0 {
            return Err(invalid_image_data(&format!(
                "secret must have positive dimensions, got {rows}x{cols}"
            )));
        }

        let expanded = rows
            .checked_mul(PIXEL_EXPANSION)
            .zip(cols.checked_mul(PIXEL_EXPANSION))
            .ok_or_else(|| invalid_image_data(&format!("{rows}x{cols} is too large to expand")))?;

        let draws: Vec<bool> = (0..rows * cols).map(|_| self.bits.next_bit()).collect();
        let draws = Array2::from_shape_vec((rows, cols), draws)
            .map_err(|e| invalid_image_data(&e))?;

        let mut first = Array2::from_elem(expanded, Ink::White);
        let mut second = first.clone();
        let scheme = self.scheme;

        Zip::from(first.exact_chunks_mut((PIXEL_EXPANSION, PIXEL_EXPANSION)))
            .and(second.exact_chunks_mut((PIXEL_EXPANSION, PIXEL_EXPANSION)))
            .and(secret.cells())
            .and(&draws)
            .for_each(|mut block_a, mut block_b, &ink, &bit| {
                let (tile_a, tile_b) = tile_pair(ink, bit, scheme);
                block_a.assign(&tile_a.view());
                block_b.assign(&tile_b.view());
            });

        debug!(
            rows,
            cols,
            share_rows = expanded.0,
            share_cols = expanded.1,
            ?scheme,
            "generated share pair"
        );

        Ok(SharePair {
            first: TwoToneImage::new(first),
            second: TwoToneImage::new(second),
        })
    }
}

/// Split a secret using an explicit bit source and the default scheme
///
/// # Errors
///
/// See [`ShareGenerator::generate`].
pub fn generate<S: BitSource>(secret: &TwoToneImage, bits: S) -> Result<SharePair> {
    ShareGenerator::new(bits).generate(secret)
}
