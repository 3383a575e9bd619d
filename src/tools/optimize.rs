//! Recompress catalog images in place
//!
//! Large JPEG and PNG files are resized to fit inside a bounding box and
//! re-encoded. A file is only overwritten when the result is smaller.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::{AssetError, format_bytes, is_image_file};

/// Files smaller than this are left alone
pub const DEFAULT_MIN_SIZE: u64 = 100 * 1024;

/// Longest allowed edge after optimization
pub const DEFAULT_MAX_DIMENSION: u32 = 1200;

pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Log a progress line after this many files
const PROGRESS_EVERY: usize = 50;

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    pub min_size: u64,
    pub max_dimension: u32,
    pub jpeg_quality: u8,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_dimension: DEFAULT_MAX_DIMENSION,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Result for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Optimized { before: u64, after: u64 },
    /// Under the size threshold
    SkippedSmall,
    /// Re-encoding did not shrink the file
    SkippedNoGain,
}

/// Totals for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizeSummary {
    pub found: usize,
    pub optimized: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Size of optimized files before rewriting
    pub original_bytes: u64,
    /// Size of optimized files after rewriting
    pub optimized_bytes: u64,
}

impl OptimizeSummary {
    pub fn saved_bytes(&self) -> u64 {
        self.original_bytes.saturating_sub(self.optimized_bytes)
    }

    pub fn saved_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.optimized_bytes as f64 / self.original_bytes as f64) * 100.0
    }

    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Optimized { before, after } => {
                self.optimized += 1;
                self.original_bytes += before;
                self.optimized_bytes += after;
            }
            FileOutcome::SkippedSmall | FileOutcome::SkippedNoGain => self.skipped += 1,
        }
    }
}

/// Images found below a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageScan {
    /// Every JPEG/PNG, in path order
    pub images: Vec<PathBuf>,
    /// Entries below the root that could not be read
    pub unreadable: usize,
}

/// Every JPEG/PNG below `dir`. Unreadable entries below the root are logged
/// and counted; only a missing or unreadable root is an error.
pub fn find_images(dir: &Path) -> Result<ImageScan, AssetError> {
    if !dir.is_dir() {
        return Err(AssetError::MissingRoot(dir.to_path_buf()));
    }

    let mut scan = ImageScan::default();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                scan.unreadable += 1;
                continue;
            }
        };
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            scan.images.push(entry.into_path());
        }
    }
    Ok(scan)
}

/// Optimize every image below `dir`. Per-file failures are logged and counted.
pub fn optimize_dir(dir: &Path, options: &OptimizeOptions) -> Result<OptimizeSummary, AssetError> {
    let ImageScan { images, unreadable } = find_images(dir)?;
    info!("Found {} images to process in {}", images.len(), dir.display());

    let mut summary = OptimizeSummary {
        found: images.len(),
        failed: unreadable,
        ..Default::default()
    };

    for (i, path) in images.iter().enumerate() {
        match optimize_file(path, options) {
            Ok(outcome) => {
                if let FileOutcome::Optimized { before, after } = outcome {
                    info!(
                        "{}: {} -> {}",
                        path.strip_prefix(dir).unwrap_or(path).display(),
                        format_bytes(before),
                        format_bytes(after)
                    );
                }
                summary.record(outcome);
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }

        if (i + 1) % PROGRESS_EVERY == 0 {
            info!("Progress: {}/{}", i + 1, images.len());
        }
    }

    Ok(summary)
}

/// Optimize a single image in place
pub fn optimize_file(path: &Path, options: &OptimizeOptions) -> Result<FileOutcome, AssetError> {
    let before = std::fs::metadata(path)
        .map_err(|e| AssetError::io(path, e))?
        .len();

    if before < options.min_size {
        debug!("{} is already small ({})", path.display(), format_bytes(before));
        return Ok(FileOutcome::SkippedSmall);
    }

    let img = image::open(path).map_err(|e| AssetError::image(path, e))?;
    let resized = fit_within(img, options.max_dimension);

    let format = output_format(path);
    let encoded = encode(&resized, format, options.jpeg_quality)
        .map_err(|e| AssetError::image(path, e))?;
    let after = encoded.len() as u64;

    if after >= before {
        debug!("{}: no gain ({} >= {})", path.display(), after, before);
        return Ok(FileOutcome::SkippedNoGain);
    }

    std::fs::write(path, encoded).map_err(|e| AssetError::io(path, e))?;
    Ok(FileOutcome::Optimized { before, after })
}

/// PNG stays PNG, everything else is written as JPEG
fn output_format(path: &Path) -> ImageFormat {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        ImageFormat::Png
    } else {
        ImageFormat::Jpeg
    }
}

/// Shrink to fit inside `max_dimension` square, keeping aspect ratio. Never enlarges.
fn fit_within(img: DynamicImage, max_dimension: u32) -> DynamicImage {
    if img.width() <= max_dimension && img.height() <= max_dimension {
        return img;
    }

    img.resize(
        max_dimension,
        max_dimension,
        image::imageops::FilterType::Lanczos3,
    )
}

fn encode(img: &DynamicImage, format: ImageFormat, quality: u8) -> Result<Vec<u8>, image::ImageError> {
    let mut buffer = Cursor::new(Vec::new());

    match format {
        ImageFormat::Png => {
            let encoder =
                PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilter::Adaptive);
            img.write_with_encoder(encoder)?;
        }
        _ => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
            rgb.write_with_encoder(encoder)?;
        }
    }

    Ok(buffer.into_inner())
}
