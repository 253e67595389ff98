//! Documentation tree discovery.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

/// Collect every file with the given extension under `root`, recursively.
///
/// Sorted so processing (and reporting) order is deterministic. A missing
/// or empty root yields an empty list.
pub fn collect_files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == extension))
        .collect();
    files.sort();
    files
}
