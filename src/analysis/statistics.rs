//! Summary statistics over two-tone grids and share tile distributions

use std::collections::HashMap;

use crate::io::configuration::PIXEL_EXPANSION;
use crate::io::error::{Result, invalid_image_data};
use crate::spatial::grid::TwoToneImage;
use crate::spatial::ink::Ink;
use crate::spatial::tiles::PixelPattern;

/// Fraction of black cells, 0.0 for an empty grid
pub fn black_fraction(grid: &TwoToneImage) -> f64 {
    if grid.is_empty() {
        return 0.0;
    }
    let black = grid.cells().iter().filter(|&&ink| ink == Ink::Black).count();
    black as f64 / grid.cells().len() as f64
}

/// Count how often each 2x2 pattern occurs over the aligned blocks of a share
///
/// Comparing histograms of shares built from all-black and all-white secrets
/// shows whether a single share leaks the secret.
///
/// # Errors
///
/// Returns [`CryptError::InvalidImageData`](crate::CryptError::InvalidImageData)
/// if either dimension is odd.
pub fn block_histogram(share: &TwoToneImage) -> Result<HashMap<PixelPattern, usize>> {
    let (rows, cols) = share.dimensions();
    if rows % PIXEL_EXPANSION != 0 || cols % PIXEL_EXPANSION != 0 {
        return Err(invalid_image_data(&format!(
            "{rows}x{cols} is not a whole number of {PIXEL_EXPANSION}x{PIXEL_EXPANSION} blocks"
        )));
    }

    let mut histogram = HashMap::new();
    for block in share
        .cells()
        .exact_chunks((PIXEL_EXPANSION, PIXEL_EXPANSION))
    {
        if let Some(pattern) = PixelPattern::from_block(&block) {
            *histogram.entry(pattern).or_insert(0) += 1;
        }
    }
    Ok(histogram)
}
