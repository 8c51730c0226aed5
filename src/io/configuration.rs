//! Pipeline constants and runtime configuration defaults

// Binarization defaults
/// Largest allowed side of the binarized grid before share expansion
pub const DEFAULT_MAX_DIMENSION: u32 = 150;
/// Intensities at or below this value become black
pub const DEFAULT_THRESHOLD: u8 = 120;

/// Side length of the sub-pixel block each source pixel expands into
pub const PIXEL_EXPANSION: usize = 2;

// Output settings
/// Directory that receives split results when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// File name of the first share
pub const SHARE_A_NAME: &str = "share1.png";
/// File name of the second share
pub const SHARE_B_NAME: &str = "share2.png";
/// File name of the overlaid shares
pub const RECONSTRUCTED_NAME: &str = "reconstructed.png";
/// File name of the copied source image
pub const SOURCE_COPY_NAME: &str = "sample.png";

/// File extensions accepted as source images (compared case-insensitively)
pub const SOURCE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
