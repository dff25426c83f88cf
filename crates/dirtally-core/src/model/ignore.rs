/// Literal file and directory names excluded from traversal and counts.
///
/// Matching is exact and case-sensitive against an entry's own file name.
/// Names that are not valid UTF-8 never match.
use compact_str::CompactString;
use std::collections::HashSet;
use std::ffi::OsStr;

/// Names ignored when no explicit set is configured.
pub const DEFAULT_IGNORES: [&str; 4] = [".DS_Store", ".git", "__pycache__", ".pytest_cache"];

/// A set of ignored names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: HashSet<CompactString>,
}

impl IgnoreSet {
    /// A set that ignores nothing.
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Add a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        self.names.insert(CompactString::new(name.as_ref()))
    }

    /// `true` if `name` is one of the ignored names.
    #[inline]
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    /// Number of ignored names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` if the set ignores nothing.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Ignored names in sorted order, for logging.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(CompactString::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        DEFAULT_IGNORES.iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for IgnoreSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}
