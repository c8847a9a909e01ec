//! Listing the entries of a results directory.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::BenchsumError;
use crate::options::FileOrder;
use crate::Result;

/// List the direct entries of a results directory.
///
/// Every entry is returned, whatever its name or type. Subdirectories are
/// not descended into; they are listed like any other entry and fail later
/// when read as a file.
pub fn list_results(dir: impl AsRef<Path>, order: FileOrder) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(BenchsumError::PathNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(BenchsumError::NotADirectory(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if order == FileOrder::Sorted {
        walker = walker.sort_by_file_name();
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        entries.push(entry.into_path());
    }

    debug!(dir = %dir.display(), entries = entries.len(), "listed results directory");

    Ok(entries)
}
