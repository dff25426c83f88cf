/// dirtally Core — directory traversal, counting, and report rendering.
///
/// This crate contains all business logic with zero console dependencies.
/// The interactive frontend lives in `dirtally-console`.
///
/// # Modules
///
/// - [`model`] — Per-directory entry records and the ignore set.
/// - [`scanner`] — Serial depth-first traversal producing one entry per directory.
/// - [`report`] — Plain-text tree report and timestamped report files.
pub mod model;
pub mod report;
pub mod scanner;

pub use model::{DirectoryEntry, IgnoreSet};
pub use report::{Report, ReportError};
pub use scanner::{analyze_directory, ScanError, ScanOptions};
