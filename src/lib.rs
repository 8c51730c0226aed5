//! Two-out-of-two visual secret sharing for two-tone images
//!
//! A source image is binarized into a black/white grid, then split into two
//! shares at twice the resolution. Neither share shows the image on its own.
//! Overlaying both shares recovers it with reduced contrast: white pixels come
//! back fully white and black pixels come back half black.

#![forbid(unsafe_code)]

/// Share generation, injectable random bits and share overlay
pub mod algorithm;
/// Binarization of source images and statistics over two-tone grids
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Two-tone pixels, grids and 2x2 tile patterns
pub mod spatial;

pub use algorithm::bits::{BitSequence, BitSource, RandomBits};
pub use algorithm::reconstruct::reconstruct;
pub use algorithm::shares::{Scheme, ShareGenerator, SharePair, generate};
pub use analysis::binarize::Binarizer;
pub use io::error::{CryptError, Result};
pub use spatial::grid::{ReconstructedImage, Share, TwoToneImage};
pub use spatial::ink::Ink;
