//! Count formatting for the report's stats lines.

/// `1 file`, `2 files`, `0 dirs`.
pub fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Comma-joined summary of the nonzero counts, e.g. `3 files, 1 dir`.
///
/// Returns `None` when both counts are zero so the caller can omit the line.
pub fn stats_summary(file_count: u64, dir_count: u64) -> Option<String> {
    let mut parts: Vec<String> = Vec::with_capacity(2);
    if file_count > 0 {
        parts.push(pluralize(file_count, "file"));
    }
    if dir_count > 0 {
        parts.push(pluralize(dir_count, "dir"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
