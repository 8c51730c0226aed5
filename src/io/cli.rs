//! Command-line interface for splitting images into shares and overlaying shares

use crate::algorithm::bits::RandomBits;
use crate::algorithm::reconstruct::reconstruct;
use crate::algorithm::shares::{Scheme, ShareGenerator};
use crate::analysis::binarize::Binarizer;
use crate::analysis::statistics::black_fraction;
use crate::io::configuration::{
    DEFAULT_MAX_DIMENSION, DEFAULT_OUTPUT_DIR, DEFAULT_THRESHOLD, RECONSTRUCTED_NAME,
    SHARE_A_NAME, SHARE_B_NAME, SOURCE_COPY_NAME, SOURCE_EXTENSIONS,
};
use crate::io::error::{CryptError, Result, invalid_parameter};
use crate::io::image::{export_source, export_two_tone, load_source, load_two_tone};
use crate::io::progress::ProgressManager;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "viscrypt")]
#[command(
    author,
    version,
    about = "Split images into two visual cryptography shares"
)]
/// Command-line arguments for the share tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Binarize images and split each into a share pair
    Split(SplitArgs),
    /// Overlay two share images into a reconstruction
    Combine(CombineArgs),
}

/// Arguments for `split`
#[derive(Args)]
pub struct SplitArgs {
    /// Source image or directory of images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory receiving one sub-directory per source image
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Random seed for reproducible shares (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Largest side of the binarized image before expansion
    #[arg(short, long, default_value_t = DEFAULT_MAX_DIMENSION)]
    pub max_dimension: u32,

    /// Intensities at or below this become black
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Tile scheme for black pixels
    #[arg(long, value_enum, default_value_t = Scheme::FixedBlack)]
    pub scheme: Scheme,

    /// Process images even if shares already exist
    #[arg(short, long)]
    pub no_skip: bool,
}

impl SplitArgs {
    /// Check if images with existing shares should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Binarizer configured from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if `--max-dimension` is zero
    pub fn binarizer(&self) -> Result<Binarizer> {
        Binarizer::new(self.max_dimension, self.threshold)
    }

    /// Bit source seeded from `--seed` or the operating system
    pub fn bit_source(&self) -> RandomBits<StdRng> {
        self.seed.map_or_else(
            RandomBits::<StdRng>::from_os_entropy,
            RandomBits::<StdRng>::seeded,
        )
    }
}

/// Arguments for `combine`
#[derive(Args)]
pub struct CombineArgs {
    /// First share image
    #[arg(value_name = "SHARE_A")]
    pub share_a: PathBuf,

    /// Second share image
    #[arg(value_name = "SHARE_B")]
    pub share_b: PathBuf,

    /// Reconstructed image path
    #[arg(short, long, default_value = RECONSTRUCTED_NAME)]
    pub output: PathBuf,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Directory holding the outputs for one source image
pub fn output_directory(output_root: &Path, input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    output_root.join(stem)
}

/// Whether a path has one of the accepted source extensions
pub fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

/// Orchestrates splitting and combining with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns the first error raised while loading, splitting, combining or
    /// saving an image
    pub fn process(&self) -> Result<()> {
        match &self.cli.command {
            Command::Split(args) => self.split(args),
            Command::Combine(args) => Self::combine(args),
        }
    }

    fn split(&self, args: &SplitArgs) -> Result<()> {
        let binarizer = args.binarizer()?;
        let files = Self::collect_files(args)?;

        if files.is_empty() {
            info!(path = %args.target.display(), "no images to split");
            return Ok(());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut generator = ShareGenerator::new(args.bit_source()).with_scheme(args.scheme);

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            Self::split_file(file, &args.output, &binarizer, &mut generator)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn split_file(
        input_path: &Path,
        output_root: &Path,
        binarizer: &Binarizer,
        generator: &mut ShareGenerator<RandomBits<StdRng>>,
    ) -> Result<()> {
        let output_dir = output_directory(output_root, input_path);

        info!(path = %input_path.display(), "loading image");
        let source = load_source(input_path)?;
        export_source(&source, output_dir.join(SOURCE_COPY_NAME))?;

        let secret = binarizer.binarize(&source);
        info!(
            rows = secret.rows(),
            cols = secret.cols(),
            threshold = binarizer.threshold(),
            "binarized image"
        );

        let shares = generator.generate(&secret)?;
        let reconstructed = shares.reconstruct()?;
        info!(
            rows = reconstructed.rows(),
            cols = reconstructed.cols(),
            black_fraction = black_fraction(&reconstructed),
            "generated and overlaid shares"
        );

        export_two_tone(&shares.first, output_dir.join(SHARE_A_NAME))?;
        export_two_tone(&shares.second, output_dir.join(SHARE_B_NAME))?;
        export_two_tone(&reconstructed, output_dir.join(RECONSTRUCTED_NAME))?;
        info!(output = %output_dir.display(), "saved shares");

        Ok(())
    }

    fn combine(args: &CombineArgs) -> Result<()> {
        info!(
            first = %args.share_a.display(),
            second = %args.share_b.display(),
            "loading shares"
        );
        let first = load_two_tone(&args.share_a)?;
        let second = load_two_tone(&args.share_b)?;

        let reconstructed = reconstruct(&first, &second)?;
        export_two_tone(&reconstructed, &args.output)?;
        info!(output = %args.output.display(), "saved reconstruction");

        Ok(())
    }

    fn collect_files(args: &SplitArgs) -> Result<Vec<PathBuf>> {
        if args.target.is_file() {
            if is_source_image(&args.target) {
                if Self::should_process_file(args, &args.target) {
                    Ok(vec![args.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &args.target.display(),
                    &format!("expected one of: {}", SOURCE_EXTENSIONS.join(", ")),
                ))
            }
        } else if args.target.is_dir() {
            let read_error = |source: std::io::Error| CryptError::FileSystem {
                path: args.target.clone(),
                operation: "list directory",
                source,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&args.target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file() && is_source_image(&path) && Self::should_process_file(args, &path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &args.target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(args: &SplitArgs, input_path: &Path) -> bool {
        if !args.skip_existing() {
            return true;
        }

        let existing = output_directory(&args.output, input_path).join(SHARE_A_NAME);
        if existing.exists() {
            info!(path = %input_path.display(), "skipping, shares already exist");
            false
        } else {
            true
        }
    }
}
