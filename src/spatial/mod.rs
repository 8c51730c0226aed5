//! Spatial data structures for two-tone images
//!
//! This module contains:
//! - The two-valued pixel type
//! - Two-tone grids used for secrets, shares and reconstructions
//! - Fixed 2x2 tile patterns used for pixel expansion

/// Two-tone grid type and raster conversion
pub mod grid;
/// Two-valued pixel type
pub mod ink;
/// 2x2 pixel patterns and pattern families
pub mod tiles;

pub use grid::TwoToneImage;
