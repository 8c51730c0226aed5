//! Error types for binarization, share generation and reconstruction

use std::fmt;
use std::path::PathBuf;

/// Main error type for all visual cryptography operations
#[derive(Debug)]
pub enum CryptError {
    /// Source image exists but could not be decoded into pixel data
    UnreadableImage {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Grid data violates the two-tone invariant or has an empty dimension
    InvalidImageData {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// Two shares passed for combination differ in shape
    DimensionMismatch {
        /// Dimensions (rows, cols) of the first share
        first: (usize, usize),
        /// Dimensions (rows, cols) of the second share
        second: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreadableImage { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::InvalidImageData { reason } => {
                write!(f, "Invalid image data: {reason}")
            }
            Self::DimensionMismatch { first, second } => {
                write!(
                    f,
                    "Share dimensions differ: {}x{} vs {}x{}",
                    first.0, first.1, second.0, second.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CryptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableImage { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for visual cryptography results
pub type Result<T> = std::result::Result<T, CryptError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CryptError {
    CryptError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid image data error
pub fn invalid_image_data(reason: &impl ToString) -> CryptError {
    CryptError::InvalidImageData {
        reason: reason.to_string(),
    }
}
