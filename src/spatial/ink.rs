//! Two-valued pixel type shared by every grid in the pipeline
//!
//! Raw 0/255 intensities only appear at the image I/O boundary; everything
//! in between works on [`Ink`] so stray intensity values cannot occur.

/// Colour of a single cell in a two-tone grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    /// Printed sub-pixel, stored as intensity 0
    Black,
    /// Transparent sub-pixel, stored as intensity 255
    White,
}

impl Ink {
    /// Raw intensity of a black cell
    pub const BLACK_LUMA: u8 = 0;
    /// Raw intensity of a white cell
    pub const WHITE_LUMA: u8 = 255;

    /// Quantize an intensity; the threshold itself counts as black
    pub const fn from_intensity(intensity: u8, threshold: u8) -> Self {
        if intensity <= threshold {
            Self::Black
        } else {
            Self::White
        }
    }

    /// Decode a raw two-tone intensity, rejecting anything but 0 and 255
    pub const fn from_luma(luma: u8) -> Option<Self> {
        match luma {
            Self::BLACK_LUMA => Some(Self::Black),
            Self::WHITE_LUMA => Some(Self::White),
            _ => None,
        }
    }

    /// Raw intensity used when encoding to an image
    pub const fn luma(self) -> u8 {
        match self {
            Self::Black => Self::BLACK_LUMA,
            Self::White => Self::WHITE_LUMA,
        }
    }

    /// The opposite colour
    pub const fn inverted(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Combine two stacked cells as `min(a + b, 255)`
    ///
    /// Only black on black stays black.
    pub const fn overlay(self, other: Self) -> Self {
        match self.luma().saturating_add(other.luma()) {
            Self::BLACK_LUMA => Self::Black,
            _ => Self::White,
        }
    }
}
