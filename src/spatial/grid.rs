//! Two-tone grids and their conversion to and from 8-bit luma rasters
//!
//! The same grid type backs the binarized secret, both shares and the
//! reconstruction. Conversion to raw intensities happens only in
//! [`TwoToneImage::from_luma`] and [`TwoToneImage::to_luma`], which are the
//! sole contact points with the image encoder and decoder.

use image::{GrayImage, Luma};
use ndarray::Array2;

use crate::io::error::{Result, invalid_image_data};
use crate::spatial::ink::Ink;

/// A grid whose every cell is either black or white
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoToneImage {
    cells: Array2<Ink>,
}

/// One of the two grids produced from a secret, at twice its resolution
pub type Share = TwoToneImage;

/// The overlay of a share pair, at the shares' resolution
pub type ReconstructedImage = TwoToneImage;

impl TwoToneImage {
    /// Wrap an existing cell array
    pub const fn new(cells: Array2<Ink>) -> Self {
        Self { cells }
    }

    /// Create a grid filled with a single colour
    pub fn filled(rows: usize, cols: usize, ink: Ink) -> Self {
        Self::new(Array2::from_elem((rows, cols), ink))
    }

    /// Decode a luma raster that must contain only 0 and 255
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::InvalidImageData`](crate::CryptError::InvalidImageData)
    /// if any pixel holds an intensity other than 0 or 255.
    pub fn from_luma(raster: &GrayImage) -> Result<Self> {
        if let Some((x, y, Luma([value]))) = raster
            .enumerate_pixels()
            .find(|(_, _, Luma([value]))| Ink::from_luma(*value).is_none())
        {
            return Err(invalid_image_data(&format!(
                "pixel ({x}, {y}) has intensity {value}, expected {} or {}",
                Ink::BLACK_LUMA,
                Ink::WHITE_LUMA
            )));
        }

        let (width, height) = raster.dimensions();
        let cells = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            raster
                .get_pixel_checked(col as u32, row as u32)
                .and_then(|&Luma([value])| Ink::from_luma(value))
                .unwrap_or(Ink::White)
        });

        Ok(Self::new(cells))
    }

    /// Encode as a luma raster using 0 for black and 255 for white
    ///
    /// # Errors
    ///
    /// Returns [`CryptError::InvalidImageData`](crate::CryptError::InvalidImageData)
    /// if a dimension does not fit in a `u32`.
    pub fn to_luma(&self) -> Result<GrayImage> {
        let (rows, cols) = self.dimensions();
        let width = u32::try_from(cols)
            .map_err(|_| invalid_image_data(&format!("width {cols} exceeds raster limits")))?;
        let height = u32::try_from(rows)
            .map_err(|_| invalid_image_data(&format!("height {rows} exceeds raster limits")))?;

        // iter() walks the cells in row-major order, matching the raster layout
        let raw: Vec<u8> = self.cells.iter().map(|ink| ink.luma()).collect();
        GrayImage::from_raw(width, height, raw)
            .ok_or_else(|| invalid_image_data(&"cell count does not match raster size"))
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Whether either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Colour of a single cell, if the position is inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Ink> {
        self.cells.get((row, col)).copied()
    }

    /// Borrow the underlying cell array
    pub const fn cells(&self) -> &Array2<Ink> {
        &self.cells
    }

    /// Consume the grid and return its cells
    pub fn into_cells(self) -> Array2<Ink> {
        self.cells
    }
}
