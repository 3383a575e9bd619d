//! Split a raw asset drop into served images and per-slide metadata
//!
//! Source layout: `{source}/{category}/slide_*/{*.jpg,*.png,data.json}`.
//! Images go to `public/images/{category}/slide_*/`, `data.json` files go to
//! `src/assets/{category}/slide_*/`. Afterwards, legacy category folders under
//! `src/assets` that still hold images in their slide folders are removed.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::{AssetError, is_image_file};

pub const DEFAULT_SOURCE: &str = "src/assets/One Folder to rule them all";
pub const PUBLIC_IMAGES_DIR: &str = "public/images";
pub const ASSETS_DIR: &str = "src/assets";
pub const DEFAULT_LEGACY_DIRS: [&str; 6] =
    ["rugs", "placemat", "TableRunner", "bedding", "throw", "cushion"];

const SLIDE_PREFIX: &str = "slide_";
const DATA_FILE: &str = "data.json";

#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// Project root the other paths are relative to
    pub root: PathBuf,
    /// Source directory, relative to `root`
    pub source: PathBuf,
    /// Legacy category folder names under `src/assets`
    pub legacy_dirs: Vec<String>,
    /// Report what would happen without touching the filesystem
    pub dry_run: bool,
}

impl OrganizeOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source: PathBuf::from(DEFAULT_SOURCE),
            legacy_dirs: DEFAULT_LEGACY_DIRS.iter().map(|d| d.to_string()).collect(),
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeReport {
    pub categories: usize,
    pub slides: usize,
    pub images_copied: usize,
    pub data_files_copied: usize,
    pub removed_dirs: Vec<PathBuf>,
    /// The source directory did not exist; nothing was copied
    pub source_missing: bool,
    /// Directories or entries that could not be read and were left out
    pub unreadable: usize,
}

/// Run the whole reorganisation
pub fn organize(options: &OrganizeOptions) -> Result<OrganizeReport, AssetError> {
    let source = options.root.join(&options.source);
    let public_images = options.root.join(PUBLIC_IMAGES_DIR);
    let assets = options.root.join(ASSETS_DIR);
    let mut report = OrganizeReport::default();

    if source.is_dir() {
        let (categories, unreadable) = subdirectories(&source)?;
        report.unreadable += unreadable;
        for category in categories {
            let name = category
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let Some(slides) = readable(subdirectories(&category), &mut report) else {
                continue;
            };
            let slides: Vec<PathBuf> = slides.into_iter().filter(|slide| is_slide_dir(slide)).collect();

            info!("Copying {} ({} slides)", name, slides.len());
            report.categories += 1;
            report.slides += slides.len();

            for slide in &slides {
                let Some(slide_name) = slide.file_name() else {
                    continue;
                };
                let image_dest = public_images.join(&name).join(slide_name);
                let data_dest = assets.join(&name).join(slide_name);

                let Some(files) = readable(files_in(slide), &mut report) else {
                    continue;
                };
                for file in files {
                    let Some(file_name) = file.file_name() else {
                        continue;
                    };
                    if is_image_file(&file) {
                        copy_file(&file, &image_dest.join(file_name), options.dry_run)?;
                        report.images_copied += 1;
                    } else if file_name == DATA_FILE {
                        copy_file(&file, &data_dest.join(file_name), options.dry_run)?;
                        report.data_files_copied += 1;
                    }
                }
            }
        }
    } else {
        warn!("Source directory not found: {}", source.display());
        report.source_missing = true;
    }

    for legacy in &options.legacy_dirs {
        let dir = assets.join(legacy);
        if !dir.is_dir() || same_path(&dir, &source) || source.starts_with(&dir) {
            continue;
        }
        let holds_images = match has_slide_images(&dir) {
            Ok(holds) => holds,
            Err(e) => {
                warn!("Keeping {}: {}", dir.display(), e);
                report.unreadable += 1;
                continue;
            }
        };
        if holds_images {
            if options.dry_run {
                info!("Would remove {}", dir.display());
            } else {
                std::fs::remove_dir_all(&dir).map_err(|e| AssetError::io(&dir, e))?;
                info!("Removed {}", dir.display());
            }
            report.removed_dirs.push(dir);
        } else {
            debug!("Keeping {} (no images in slide folders)", dir.display());
        }
    }

    Ok(report)
}

fn is_slide_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(SLIDE_PREFIX))
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Direct child directories
fn subdirectories(dir: &Path) -> Result<(Vec<PathBuf>, usize), AssetError> {
    children(dir, |entry| entry.file_type().is_dir())
}

/// Direct child files
fn files_in(dir: &Path) -> Result<(Vec<PathBuf>, usize), AssetError> {
    children(dir, |entry| entry.file_type().is_file())
}

/// Direct children of `dir` passing `keep`, sorted by name. Entries that
/// cannot be read are logged and left out; an unreadable `dir` is an error.
fn children(
    dir: &Path,
    keep: impl Fn(&walkdir::DirEntry) -> bool,
) -> Result<(Vec<PathBuf>, usize), AssetError> {
    let mut out = Vec::new();
    let mut unreadable = 0;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                unreadable += 1;
                continue;
            }
        };
        if keep(&entry) {
            out.push(entry.into_path());
        }
    }
    Ok((out, unreadable))
}

/// Keep the listing, or log the failure and count it against the report
fn readable(
    listing: Result<(Vec<PathBuf>, usize), AssetError>,
    report: &mut OrganizeReport,
) -> Option<Vec<PathBuf>> {
    match listing {
        Ok((paths, unreadable)) => {
            report.unreadable += unreadable;
            Some(paths)
        }
        Err(e) => {
            warn!("Skipping {}", e);
            report.unreadable += 1;
            None
        }
    }
}

/// Whether any child directory of `dir` directly contains an image
fn has_slide_images(dir: &Path) -> Result<bool, AssetError> {
    let (slides, _) = subdirectories(dir)?;
    for child in slides {
        let (files, _) = files_in(&child)?;
        if files.iter().any(|f| is_image_file(f)) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn copy_file(src: &Path, dest: &Path, dry_run: bool) -> Result<(), AssetError> {
    if dry_run {
        debug!("Would copy {} -> {}", src.display(), dest.display());
        return Ok(());
    }

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AssetError::io(parent, e))?;
    }
    std::fs::copy(src, dest).map_err(|e| AssetError::io(src, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path, contents: &[u8]) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    /// A project with two categories in the source drop and one legacy folder
    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join(DEFAULT_SOURCE);

        touch(&source.join("rugs/slide_001/front.jpg"), b"jpg");
        touch(&source.join("rugs/slide_001/data.json"), b"{\"title\":\"Rug\"}");
        touch(&source.join("rugs/slide_002/detail.png"), b"png");
        touch(&source.join("rugs/notes/ignored.jpg"), b"jpg");
        touch(&source.join("throw/slide_001/a.jpeg"), b"jpeg");
        touch(&source.join("throw/slide_001/readme.txt"), b"txt");

        touch(&dir.path().join("src/assets/bedding/slide_009/old.jpg"), b"old");
        dir
    }

    #[test]
    fn test_copies_images_and_data_files() {
        let dir = project();
        let report = organize(&OrganizeOptions::new(dir.path())).unwrap();

        let root = dir.path();
        assert!(root.join("public/images/rugs/slide_001/front.jpg").is_file());
        assert!(root.join("public/images/rugs/slide_002/detail.png").is_file());
        assert!(root.join("public/images/throw/slide_001/a.jpeg").is_file());
        assert!(!root.join("public/images/rugs/slide_001/data.json").exists());
        assert!(!root.join("public/images/throw/slide_001/readme.txt").exists());
        assert!(!root.join("public/images/rugs/notes").exists());

        assert!(root.join("src/assets/rugs/slide_001/data.json").is_file());
        assert!(!root.join("src/assets/rugs/slide_001/front.jpg").exists());

        assert_eq!(report.categories, 2);
        assert_eq!(report.slides, 3);
        assert_eq!(report.images_copied, 3);
        assert_eq!(report.data_files_copied, 1);
    }

    #[test]
    fn test_removes_legacy_dirs_with_images_only() {
        let dir = project();
        let report = organize(&OrganizeOptions::new(dir.path())).unwrap();

        let assets = dir.path().join(ASSETS_DIR);
        // bedding held images: removed
        assert!(!assets.join("bedding").exists());
        // rugs now only holds data.json: kept
        assert!(assets.join("rugs/slide_001/data.json").is_file());
        assert_eq!(report.removed_dirs, vec![assets.join("bedding")]);
        // source untouched
        assert!(dir.path().join(DEFAULT_SOURCE).join("rugs/slide_001/front.jpg").is_file());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = project();
        let mut options = OrganizeOptions::new(dir.path());
        options.dry_run = true;

        let report = organize(&options).unwrap();

        assert_eq!(report.images_copied, 3);
        assert_eq!(report.removed_dirs.len(), 1);
        assert!(!dir.path().join(PUBLIC_IMAGES_DIR).exists());
        assert!(dir.path().join("src/assets/bedding/slide_009/old.jpg").is_file());
    }

    #[test]
    fn test_missing_source_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("src/assets/throw/slide_001/x.png"), b"png");

        let report = organize(&OrganizeOptions::new(dir.path())).unwrap();

        assert!(report.source_missing);
        assert_eq!(report.images_copied, 0);
        // Legacy cleanup still runs
        assert!(!dir.path().join("src/assets/throw").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_slide_is_skipped_and_run_continues() {
        use std::os::unix::fs::PermissionsExt;

        let dir = project();
        let locked = dir.path().join(DEFAULT_SOURCE).join("rugs/slide_002");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root can read anything; nothing to check then
        let readable_anyway = std::fs::read_dir(&locked).is_ok();
        let report = organize(&OrganizeOptions::new(dir.path()));
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        if readable_anyway {
            return;
        }

        let report = report.unwrap();
        let root = dir.path();
        assert!(root.join("public/images/rugs/slide_001/front.jpg").is_file());
        assert!(root.join("public/images/throw/slide_001/a.jpeg").is_file());
        assert!(!root.join("public/images/rugs/slide_002/detail.png").exists());
        assert_eq!(report.images_copied, 2);
        assert_eq!(report.unreadable, 1);
    }

    #[test]
    fn test_source_inside_legacy_dir_is_never_removed() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("src/assets/rugs/slide_001/a.jpg"), b"jpg");

        let mut options = OrganizeOptions::new(dir.path());
        options.source = PathBuf::from("src/assets/rugs");
        let report = organize(&options).unwrap();

        assert!(report.removed_dirs.is_empty());
        assert!(dir.path().join("src/assets/rugs/slide_001/a.jpg").is_file());
    }
}
