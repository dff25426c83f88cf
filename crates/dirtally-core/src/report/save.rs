/// Persisting a rendered report to a timestamped text file.
use super::ReportError;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// File names look like `directory_structure_20240102_030405.txt`.
pub const REPORT_FILE_PREFIX: &str = "directory_structure_";
pub const REPORT_FILE_EXTENSION: &str = "txt";

const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for a report saved at `at`.
pub fn report_file_name(at: &DateTime<Local>) -> String {
    format!(
        "{REPORT_FILE_PREFIX}{}.{REPORT_FILE_EXTENSION}",
        at.format(FILE_TIMESTAMP_FORMAT)
    )
}

/// Write `text` into `dir` under a name derived from `at`.
///
/// An existing file with the same name is overwritten.
pub fn save_report(text: &str, dir: &Path, at: DateTime<Local>) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_file_name(&at));
    std::fs::write(&path, text).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    info!("Report written to {} ({} bytes)", path.display(), text.len());
    Ok(path)
}
