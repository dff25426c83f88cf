/// Data model for dirtally.
///
/// Re-exports the per-directory entry record and the ignore set.
pub mod directory_entry;
pub mod ignore;

pub use directory_entry::DirectoryEntry;
pub use ignore::{IgnoreSet, DEFAULT_IGNORES};
