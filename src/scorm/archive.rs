use crate::error::{Result, ScormError};
use crate::scorm::MANIFEST_PATH;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A file on disk and the name it takes inside the archive
#[derive(Debug, Clone)]
pub struct PackageFile {
    pub source: PathBuf,
    pub name: String,
}

/// An entry written to the archive, with its uncompressed size.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveEntry {
    pub name: String,
    pub size: u64,
}

/// What ended up in the archive.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub entries: Vec<ArchiveEntry>,
    /// Entry names that were already taken and were left out.
    pub skipped: Vec<String>,
}

/// Write a SCORM package: the manifest first, then `files` in order.
///
/// The archive is built next to `path` and renamed into place once complete,
/// so a failure never leaves a partial package at `path`.
pub fn write_package(path: &Path, manifest_xml: &str, files: &[PackageFile]) -> Result<WriteReport> {
    let tmp_path = tmp_path_for(path);
    match write_archive(&tmp_path, manifest_xml, files) {
        Ok(report) => {
            std::fs::rename(&tmp_path, path)?;
            Ok(report)
        }
        Err(e) => {
            let _ = std::fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

/// Scratch path used while the archive is being written.
pub fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_archive(path: &Path, manifest_xml: &str, files: &[PackageFile]) -> Result<WriteReport> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let deflate = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut report = WriteReport::default();
    let mut seen = HashSet::new();

    zip.start_file(MANIFEST_PATH, deflate)?;
    zip.write_all(manifest_xml.as_bytes())?;
    seen.insert(MANIFEST_PATH.to_string());
    report.entries.push(ArchiveEntry {
        name: MANIFEST_PATH.to_string(),
        size: manifest_xml.len() as u64,
    });

    for item in files {
        if !seen.insert(item.name.clone()) {
            report.skipped.push(item.name.clone());
            continue;
        }
        let data = std::fs::read(&item.source).map_err(|source| ScormError::Read {
            path: item.source.clone(),
            source,
        })?;
        zip.start_file(item.name.as_str(), deflate)?;
        zip.write_all(&data)?;
        report.entries.push(ArchiveEntry {
            name: item.name.clone(),
            size: data.len() as u64,
        });
    }

    zip.finish()?;
    Ok(report)
}
