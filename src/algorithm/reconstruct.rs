//! Share overlay

use ndarray::Zip;

use crate::io::error::{CryptError, Result};
use crate::spatial::grid::{ReconstructedImage, Share, TwoToneImage};
use crate::spatial::ink::Ink;

/// Overlay two shares cell by cell as `min(a + b, 255)`
///
/// # Errors
///
/// Returns [`CryptError::DimensionMismatch`] if the shares differ in shape.
pub fn reconstruct(first: &Share, second: &Share) -> Result<ReconstructedImage> {
    if first.dimensions() != second.dimensions() {
        return Err(CryptError::DimensionMismatch {
            first: first.dimensions(),
            second: second.dimensions(),
        });
    }

    let cells = Zip::from(first.cells())
        .and(second.cells())
        .map_collect(|&a, &b| Ink::overlay(a, b));

    Ok(TwoToneImage::new(cells))
}
