//! Offline asset maintenance used by the `asset-tools` binary

pub mod optimize;
pub mod organize;

use std::path::{Path, PathBuf};

pub use optimize::{OptimizeOptions, OptimizeSummary, optimize_dir};
pub use organize::{OrganizeOptions, OrganizeReport, organize};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("directory not found: {0}")]
    MissingRoot(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl AssetError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        AssetError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn image(path: &Path, source: image::ImageError) -> Self {
        AssetError::Image {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Whether `path` has a `.jpg`, `.jpeg` or `.png` extension (any case)
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg" | "png"))
        .unwrap_or(false)
}

/// Human readable byte count
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a/b/rug.jpg")));
        assert!(is_image_file(Path::new("RUG.JPEG")));
        assert!(is_image_file(Path::new("mat.Png")));
        assert!(!is_image_file(Path::new("data.json")));
        assert!(!is_image_file(Path::new("logo.webp")));
        assert!(!is_image_file(Path::new("jpg")));
    }
}
