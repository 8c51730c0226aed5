//! Analysis modules for binarization and share statistics

/// Grayscale conversion, bounded downscaling and threshold quantization
pub mod binarize;
/// Statistics over two-tone grids and share tile distributions
pub mod statistics;
