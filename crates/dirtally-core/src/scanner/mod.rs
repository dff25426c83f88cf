/// Scanner module — walks a directory tree and counts what each directory holds.
///
/// The walk is serial and depth-first. Every visited directory, the root
/// included, yields exactly one [`DirectoryEntry`], and a parent is always
/// emitted before any of its descendants. Any I/O error met on the way
/// aborts the scan; there is no partial result.
mod walk;

use crate::model::{DirectoryEntry, IgnoreSet};
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Options controlling a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Names dropped before counting and before descending.
    pub ignore: IgnoreSet,
}

impl ScanOptions {
    /// Replace the ignore set.
    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }
}

/// Fatal scan failures.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root could not be inspected at all.
    #[error("cannot access '{}': {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root exists but is not a directory.
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Reading a directory or one of its entries failed.
    #[error(transparent)]
    Walk(#[from] jwalk::Error),
}

/// Walk the tree under `root` and return one entry per directory, in
/// traversal order.
pub fn analyze_directory(
    root: &Path,
    options: &ScanOptions,
) -> Result<Vec<DirectoryEntry>, ScanError> {
    let meta = std::fs::metadata(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let start = Instant::now();
    let label = root_label(root);
    info!("Starting scan of {}", root.display());
    debug!("Ignoring {:?}", options.ignore.sorted_names());

    let entries = walk::walk_serial(root, &label, &options.ignore)?;

    let files: u64 = entries.iter().map(|e| e.file_count).sum();
    let dirs: u64 = entries.iter().map(|e| e.subdirectory_count).sum();
    info!(
        "Scan complete: {} directories visited, {} files, {} subdirectories in {:?}",
        entries.len(),
        files,
        dirs,
        start.elapsed()
    );

    Ok(entries)
}

/// Derive the label used for the scan root.
///
/// Uses the path's own base name; for paths without one (`.`, `..`, `/`)
/// the canonical path's base name is tried, then the path text itself.
pub fn root_label(path: &Path) -> CompactString {
    if let Some(name) = path.file_name() {
        return CompactString::new(name.to_string_lossy());
    }
    if let Some(name) = std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
    {
        return CompactString::new(name);
    }
    let text = path.to_string_lossy();
    let trimmed = text.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        CompactString::new(text)
    } else {
        CompactString::new(trimmed)
    }
}
