/// A single visited directory and the counts of what sits directly inside it.
///
/// Entries are produced by the scanner in traversal order (a parent always
/// precedes its descendants) and are never mutated once the walk finishes.
/// Counts are accumulated in a private pending record during the walk and
/// frozen into a `DirectoryEntry` at the end.
use compact_str::CompactString;
use std::path::{Path, PathBuf};

/// One row of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Path relative to the scan root, e.g. `src/model`.
    ///
    /// The root itself is labelled by its own base name rather than `.`.
    pub relative_path: PathBuf,

    /// Last segment of `relative_path`, used as the tree label.
    pub name: CompactString,

    /// Number of path segments between this directory and the root.
    /// The root is depth 0, its direct children depth 1.
    pub depth: usize,

    /// Files directly inside this directory, after ignore filtering.
    pub file_count: u64,

    /// Subdirectories directly inside this directory, after ignore filtering.
    pub subdirectory_count: u64,
}

impl DirectoryEntry {
    /// Create an entry. The display name is derived from the last segment of
    /// `relative_path`, falling back to the whole path text.
    pub fn new(
        relative_path: impl Into<PathBuf>,
        depth: usize,
        file_count: u64,
        subdirectory_count: u64,
    ) -> Self {
        let relative_path = relative_path.into();
        let name = display_name(&relative_path);
        Self {
            relative_path,
            name,
            depth,
            file_count,
            subdirectory_count,
        }
    }

    /// `true` for the scan root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// `true` if nothing was counted directly inside this directory.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.file_count == 0 && self.subdirectory_count == 0
    }
}

fn display_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::new(name.to_string_lossy()),
        None => CompactString::new(path.to_string_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_last_segment() {
        let entry = DirectoryEntry::new(Path::new("src").join("model"), 2, 3, 0);
        assert_eq!(entry.name, "model");
        assert!(!entry.is_root());
        assert!(!entry.is_empty());
    }

    #[test]
    fn root_keeps_its_label() {
        let entry = DirectoryEntry::new("project", 0, 0, 0);
        assert_eq!(entry.name, "project");
        assert!(entry.is_root());
        assert!(entry.is_empty());
    }
}
