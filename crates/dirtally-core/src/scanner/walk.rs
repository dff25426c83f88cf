/// Serial depth-first walker built on `jwalk`.
///
/// Ignored names are dropped in `process_read_dir`, before the walker sees
/// them, so an ignored directory is neither counted nor descended into.
///
/// # Parent tracking
///
/// `jwalk` yields entries in depth-first order, so the parent of an entry at
/// depth `d` is always the most recently opened directory at depth `d - 1`.
/// `open` holds the `pending` index of each directory on the current descent
/// path; truncating it to `d` before each lookup keeps it in sync without a
/// path-keyed map.
use super::ScanError;
use crate::model::{DirectoryEntry, IgnoreSet};
use compact_str::CompactString;
use jwalk::{Parallelism, WalkDir};
use std::path::{Path, PathBuf};
use tracing::trace;

/// A directory whose counts are still being accumulated.
struct PendingDir {
    relative_path: PathBuf,
    name: CompactString,
    depth: usize,
    file_count: u64,
    subdirectory_count: u64,
}

impl PendingDir {
    fn new(relative_path: PathBuf, name: CompactString, depth: usize) -> Self {
        Self {
            relative_path,
            name,
            depth,
            file_count: 0,
            subdirectory_count: 0,
        }
    }

    fn finish(self) -> DirectoryEntry {
        DirectoryEntry {
            relative_path: self.relative_path,
            name: self.name,
            depth: self.depth,
            file_count: self.file_count,
            subdirectory_count: self.subdirectory_count,
        }
    }
}

/// Walk `root` and return one entry per visited directory, root first.
pub(super) fn walk_serial(
    root: &Path,
    root_label: &str,
    ignore: &IgnoreSet,
) -> Result<Vec<DirectoryEntry>, ScanError> {
    let filter = ignore.clone();
    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(Parallelism::Serial)
        .process_read_dir(move |depth, _path, _state, children| {
            // `None` is the synthetic read that yields the root itself.
            if depth.is_none() {
                return;
            }
            children.retain(|child| match child {
                Ok(entry) => !filter.matches(&entry.file_name),
                // Keep errors so the main loop can report them.
                Err(_) => true,
            });
        });

    let mut pending: Vec<PendingDir> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for entry_result in walker {
        let mut entry = entry_result?;
        if let Some(err) = entry.read_children_error.take() {
            return Err(err.into());
        }

        let depth = entry.depth;
        if depth == 0 {
            open.push(pending.len());
            pending.push(PendingDir::new(
                PathBuf::from(root_label),
                CompactString::new(root_label),
                0,
            ));
            continue;
        }

        // Serial depth-first order: the parent is always the last open
        // directory one level up.
        open.truncate(depth);
        let parent_idx = open[depth - 1];

        let file_type = entry.file_type();
        let counts_as_dir = if file_type.is_symlink() {
            link_targets_dir(&entry.path())
        } else {
            file_type.is_dir()
        };

        let parent = &mut pending[parent_idx];
        if counts_as_dir {
            parent.subdirectory_count += 1;
        } else {
            parent.file_count += 1;
        }

        // Symlinked directories are counted but never descended into.
        if file_type.is_dir() {
            let file_name = entry.file_name();
            let relative_path = if depth == 1 {
                PathBuf::from(file_name)
            } else {
                parent.relative_path.join(file_name)
            };
            trace!("Entering {}", relative_path.display());

            open.push(pending.len());
            pending.push(PendingDir::new(
                relative_path,
                CompactString::new(file_name.to_string_lossy()),
                depth,
            ));
        }
    }

    Ok(pending.into_iter().map(PendingDir::finish).collect())
}

/// A dangling link, or one we cannot stat, counts as a file.
fn link_targets_dir(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
