//! Directory-to-SCORM packaging pipeline.

use crate::scorm::archive::{self, ArchiveEntry, PackageFile};
use crate::scorm::manifest::build_manifest;
use crate::scorm::scan::{self, ImageDirStatus};
use crate::util::{archive_path, file_name_string};
use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Lecture Notes";
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_OUTPUT: &str = "scorm_package.zip";

/// Inputs for building one package.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    /// Directory holding the `.html` pages. Defaults to the current directory.
    pub source_dir: PathBuf,
    /// Archive to write. Defaults to `scorm_package.zip`.
    pub output: PathBuf,
    /// Package title shown by the LMS. Defaults to `Lecture Notes`.
    pub title: String,
    /// Image folder, relative to `source_dir`. Defaults to `images`.
    pub images_dir: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
        }
    }
}

impl PackageConfig {
    /// Full path of the image folder.
    pub fn images_path(&self) -> PathBuf {
        self.source_dir.join(&self.images_dir)
    }
}

/// Summary of a written package
#[derive(Debug, Serialize)]
pub struct PackageSummary {
    pub output: PathBuf,
    pub title: String,
    pub html_files: usize,
    /// Images declared by every resource in the manifest.
    pub manifest_assets: usize,
    /// Files archived from the image folder.
    pub images_archived: usize,
    pub images_dir: PathBuf,
    pub images_status: ImageDirStatus,
    pub entries: Vec<ArchiveEntry>,
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub enum PackageOutcome {
    Created(PackageSummary),
    /// The source directory has no pages; nothing was written.
    NoContent,
}

/// Package every `.html` page in the source directory, plus the image folder,
/// into a SCORM 1.2 zip.
pub fn package_directory(config: &PackageConfig) -> anyhow::Result<PackageOutcome> {
    let source_dir = &config.source_dir;
    let html_files = scan::find_html_files(source_dir)
        .with_context(|| format!("listing {}", source_dir.display()))?;
    if html_files.is_empty() {
        return Ok(PackageOutcome::NoContent);
    }

    let images_path = config.images_path();
    let images = scan::scan_images(&images_path);

    let asset_hrefs: Vec<String> = images
        .assets
        .iter()
        .map(|p| entry_name(p, source_dir, &images_path))
        .collect();

    let manifest = build_manifest(&html_files, &asset_hrefs, source_dir, &config.title)
        .context("building imsmanifest.xml")?;

    let mut files: Vec<PackageFile> = html_files
        .iter()
        .map(|name| PackageFile {
            source: source_dir.join(name),
            name: name.clone(),
        })
        .collect();

    let excluded = [
        resolve(&config.output),
        resolve(&archive::tmp_path_for(&config.output)),
    ];
    let image_files: Vec<PackageFile> = images
        .files
        .iter()
        .filter(|p| !excluded.contains(&resolve(p)))
        .map(|p| PackageFile {
            source: p.clone(),
            name: entry_name(p, source_dir, &images_path),
        })
        .collect();
    let images_archived = image_files.len();
    files.extend(image_files);

    let report = archive::write_package(&config.output, &manifest.to_xml(), &files)
        .with_context(|| format!("writing {}", config.output.display()))?;

    Ok(PackageOutcome::Created(PackageSummary {
        output: config.output.clone(),
        title: config.title.clone(),
        html_files: html_files.len(),
        manifest_assets: asset_hrefs.len(),
        images_archived: images_archived.saturating_sub(report.skipped.len()),
        images_dir: images_path,
        images_status: images.status,
        entries: report.entries,
        skipped: report.skipped,
    }))
}

/// Archive name for a file under the image folder.
///
/// Relative to the source directory when possible, otherwise relative to
/// the image folder itself (an absolute image path elsewhere on disk).
fn entry_name(path: &Path, source_dir: &Path, images_path: &Path) -> String {
    archive_path(path, source_dir)
        .or_else(|| archive_path(path, images_path))
        .unwrap_or_else(|| file_name_string(path))
}

/// Best-effort absolute form of a path that may not exist yet.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(p) = path.canonicalize() {
        return p;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent
                .canonicalize()
                .map(|p| p.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}
