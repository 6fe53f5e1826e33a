use crate::config::Config;
use crate::error::Result;
use crate::transform::split_name;
use std::path::Path;
use walkdir::WalkDir;

/// Base names collected by a scan, in traversal order.
pub type FileList = Vec<String>;

/// Collect the base names of every file under `root`.
///
/// Directories are descended into but never listed. Files whose extension is
/// in [`Config::excluded_extensions`] are skipped. Entries are visited sorted
/// by file name within each directory. The first unreadable entry aborts the
/// scan.
pub fn scan_directory(root: &Path, config: &Config) -> Result<FileList> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "Skipping file with non UTF-8 name");
            continue;
        };

        let (_, extension) = split_name(name);
        if config.is_excluded(extension) {
            tracing::debug!(file = name, extension, "Skipping excluded extension");
            continue;
        }

        tracing::trace!(file = name, depth = entry.depth(), "Scanned");
        files.push(name.to_string());
    }

    tracing::debug!(count = files.len(), root = %root.display(), "Scan complete");
    Ok(files)
}
