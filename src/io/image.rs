//! Decoding of source images and PNG export of two-tone grids

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat};

use crate::io::error::{CryptError, Result};
use crate::spatial::grid::TwoToneImage;

/// Decode an image file, keeping "missing" distinct from "undecodable"
///
/// # Errors
///
/// Returns [`CryptError::FileSystem`] if the file does not exist and
/// [`CryptError::UnreadableImage`] if its contents cannot be decoded.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path_buf = path.as_ref().to_path_buf();
    image::open(&path_buf).map_err(|error| match error {
        ImageError::IoError(source) if source.kind() == ErrorKind::NotFound => {
            CryptError::FileSystem {
                path: path_buf,
                operation: "open image",
                source,
            }
        }
        other => CryptError::UnreadableImage {
            path: path_buf,
            source: other,
        },
    })
}

/// Decode an in-memory encoded image
///
/// # Errors
///
/// Returns [`CryptError::UnreadableImage`] if the bytes cannot be decoded.
pub fn decode_source(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|source| CryptError::UnreadableImage {
        path: PathBuf::from("<memory>"),
        source,
    })
}

/// Load a share raster written by [`export_two_tone`]
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or if it holds
/// intensities other than 0 and 255.
pub fn load_two_tone<P: AsRef<Path>>(path: P) -> Result<TwoToneImage> {
    let raster = load_source(path)?.to_luma8();
    TwoToneImage::from_luma(&raster)
}

/// Write a two-tone grid as an 8-bit grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - A grid dimension does not fit in a raster
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_two_tone<P: AsRef<Path>>(grid: &TwoToneImage, output_path: P) -> Result<()> {
    let raster = grid.to_luma()?;
    let output_path = output_path.as_ref();
    ensure_parent(output_path)?;

    raster
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| CryptError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Re-encode a decoded source image as PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved.
pub fn export_source<P: AsRef<Path>>(source: &DynamicImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    ensure_parent(output_path)?;

    source
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| CryptError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

fn ensure_parent(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CryptError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
