use crate::error::{Result, ScormError};
use crate::util::{is_html_name, is_image_path};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What was found at the image subdirectory path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDirStatus {
    /// Contains at least one file somewhere below it.
    Present,
    /// Exists but holds no files.
    Empty,
    /// Absent, not a directory, or unreadable.
    Missing,
}

/// Result of scanning the image subdirectory.
#[derive(Debug, Clone)]
pub struct ImageScan {
    pub status: ImageDirStatus,
    /// Top-level files with an image extension; these are declared in the manifest.
    pub assets: Vec<PathBuf>,
    /// Every file below the directory, recursively; these are archived.
    pub files: Vec<PathBuf>,
}

impl ImageScan {
    fn missing() -> Self {
        Self {
            status: ImageDirStatus::Missing,
            assets: Vec::new(),
            files: Vec::new(),
        }
    }
}

/// List the `.html` files directly inside `dir`, sorted by name.
pub fn find_html_files(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|source| ScormError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_html_name(&name) && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Scan the image subdirectory.
///
/// Never fails: a directory that cannot be read counts as missing, and
/// unreadable subdirectories are skipped.
pub fn scan_images(images_dir: &Path) -> ImageScan {
    let Ok(entries) = fs::read_dir(images_dir) else {
        return ImageScan::missing();
    };

    let mut files = Vec::new();
    collect_files(entries, &mut files);
    files.sort();

    let assets: Vec<PathBuf> = files
        .iter()
        .filter(|p| p.parent() == Some(images_dir) && is_image_path(p))
        .cloned()
        .collect();

    let status = if files.is_empty() {
        ImageDirStatus::Empty
    } else {
        ImageDirStatus::Present
    };

    ImageScan {
        status,
        assets,
        files,
    }
}

/// Recursively collect files, following symlinked files but not symlinked directories
fn collect_files(entries: fs::ReadDir, out: &mut Vec<PathBuf>) {
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if let Ok(sub) = fs::read_dir(&path) {
                collect_files(sub, out);
            }
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            out.push(path);
        }
    }
}
