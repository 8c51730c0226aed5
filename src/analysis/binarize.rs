//! Reduction of arbitrary source images to bounded two-tone grids
//!
//! Three stages: luminance conversion, aspect-preserving Lanczos downscale
//! when either side exceeds the bound, and an inclusive threshold.

use std::borrow::Cow;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};
use ndarray::Array2;
use tracing::debug;

use crate::io::configuration::{DEFAULT_MAX_DIMENSION, DEFAULT_THRESHOLD};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{decode_source, load_source};
use crate::spatial::grid::TwoToneImage;
use crate::spatial::ink::Ink;

/// Single-channel 8-bit intensity grid
pub type GrayscaleImage = GrayImage;

/// Converts source images into two-tone grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binarizer {
    max_dimension: u32,
    threshold: u8,
}

impl Default for Binarizer {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Binarizer {
    /// Create a binarizer with a custom size bound and threshold
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::InvalidParameter`](crate::CryptError::InvalidParameter)
    /// if `max_dimension` is zero.
    pub fn new(max_dimension: u32, threshold: u8) -> Result<Self> {
        if max_dimension == 0 {
            return Err(invalid_parameter(
                "max_dimension",
                &max_dimension,
                &"must be at least 1",
            ));
        }
        Ok(Self {
            max_dimension,
            threshold,
        })
    }

    /// Largest allowed side of the output grid
    pub const fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Highest intensity that still maps to black
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Binarize an already decoded image
    pub fn binarize(&self, source: &DynamicImage) -> TwoToneImage {
        let gray = grayscale(source);
        let bounded = downscale(&gray, self.max_dimension);

        debug!(
            source_width = gray.width(),
            source_height = gray.height(),
            width = bounded.width(),
            height = bounded.height(),
            resized = matches!(bounded, Cow::Owned(_)),
            threshold = self.threshold,
            "binarizing image"
        );

        quantize(&bounded, self.threshold)
    }

    /// Decode and binarize an image file
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::UnreadableImage`](crate::CryptError::UnreadableImage)
    /// if the file cannot be decoded, or
    /// [`CryptError::FileSystem`](crate::CryptError::FileSystem) if it does not exist.
    pub fn binarize_file<P: AsRef<Path>>(&self, path: P) -> Result<TwoToneImage> {
        let source = load_source(path)?;
        Ok(self.binarize(&source))
    }

    /// Decode and binarize an in-memory encoded image
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::UnreadableImage`](crate::CryptError::UnreadableImage)
    /// if the bytes cannot be decoded.
    pub fn binarize_bytes(&self, bytes: &[u8]) -> Result<TwoToneImage> {
        let source = decode_source(bytes)?;
        Ok(self.binarize(&source))
    }
}

/// Luminance-preserving conversion to one 8-bit channel (alpha is dropped)
pub fn grayscale(source: &DynamicImage) -> GrayscaleImage {
    source.to_luma8()
}

/// Size after fitting `(width, height)` inside a `max` x `max` box
///
/// Images already inside the box keep their size. Otherwise the larger side
/// becomes exactly `max` and the smaller side is scaled and rounded, never
/// below 1.
pub fn bounded_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let scale = |side: u32, larger: u32| {
        let scaled = (f64::from(side) * f64::from(max) / f64::from(larger)).round() as u32;
        scaled.clamp(1, max)
    };

    if width >= height {
        (max, scale(height, width))
    } else {
        (scale(width, height), max)
    }
}

/// Lanczos downscale so neither side exceeds `max`; borrows when in bounds
pub fn downscale(gray: &GrayscaleImage, max: u32) -> Cow<'_, GrayscaleImage> {
    let (width, height) = bounded_dimensions(gray.width(), gray.height(), max);
    if (width, height) == gray.dimensions() {
        Cow::Borrowed(gray)
    } else {
        Cow::Owned(imageops::resize(gray, width, height, FilterType::Lanczos3))
    }
}

/// Map every intensity to black (`<= threshold`) or white
pub fn quantize(gray: &GrayscaleImage, threshold: u8) -> TwoToneImage {
    let (width, height) = gray.dimensions();
    let cells = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        gray.get_pixel_checked(col as u32, row as u32)
            .map_or(Ink::White, |&Luma([intensity])| {
                Ink::from_intensity(intensity, threshold)
            })
    });
    TwoToneImage::new(cells)
}
