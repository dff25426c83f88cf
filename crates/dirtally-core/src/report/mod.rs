/// Report generation — renders a directory listing as a plain-text tree.
///
/// Layout:
///
/// ```text
/// Project Directory Structure Report
/// ===================================
/// Generated: 2024-01-02 03:04:05
/// Root Directory: /home/user/project
///
/// Directory Structure:
/// -----------------------------------
/// project/
///    (1 file, 1 dir)
///   └──docs/
///
/// Summary:
/// -----------------------------------
/// Total Directories: 1
/// Total Files: 1
/// ```
///
/// Every non-root entry gets the same `└──` marker; siblings are not told
/// apart by position.
pub mod format;
pub mod save;

pub use format::{pluralize, stats_summary};
pub use save::{report_file_name, save_report, REPORT_FILE_EXTENSION, REPORT_FILE_PREFIX};

use crate::model::DirectoryEntry;
use chrono::{DateTime, Local};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const REPORT_TITLE: &str = "Project Directory Structure Report";

/// Width of the `=` and `-` rules under headings.
const RULE_WIDTH: usize = 35;
const INDENT: &str = "  ";
const BRANCH_MARKER: &str = "└──";
/// Stats lines sit three columns in from their entry's indent.
const STATS_PAD: &str = "   ";
const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Failures while persisting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only aggregate of a finished scan.
#[derive(Debug, Clone)]
pub struct Report {
    root: PathBuf,
    generated_at: DateTime<Local>,
    entries: Vec<DirectoryEntry>,
    total_files: u64,
    total_dirs: u64,
}

impl Report {
    /// Build a report stamped with the current local time.
    pub fn new(root: impl Into<PathBuf>, entries: Vec<DirectoryEntry>) -> Self {
        Self::with_timestamp(root, entries, Local::now())
    }

    /// Build a report with an explicit generation time.
    pub fn with_timestamp(
        root: impl Into<PathBuf>,
        entries: Vec<DirectoryEntry>,
        generated_at: DateTime<Local>,
    ) -> Self {
        let total_files = entries.iter().map(|e| e.file_count).sum();
        let total_dirs = entries.iter().map(|e| e.subdirectory_count).sum();
        Self {
            root: root.into(),
            generated_at,
            entries,
            total_files,
            total_dirs,
        }
    }

    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    /// Sum of `file_count` over all entries.
    pub fn total_files(&self) -> u64 {
        self.total_files
    }

    /// Sum of `subdirectory_count` over all entries.
    pub fn total_dirs(&self) -> u64 {
        self.total_dirs
    }

    /// Render the full report. Lines are joined with `\n` and there is no
    /// trailing newline.
    pub fn render(&self) -> String {
        let heading_rule = "=".repeat(RULE_WIDTH);
        let section_rule = "-".repeat(RULE_WIDTH);

        let mut lines: Vec<String> = Vec::with_capacity(self.entries.len() * 2 + 13);
        lines.push(REPORT_TITLE.to_string());
        lines.push(heading_rule);
        lines.push(format!(
            "Generated: {}",
            self.generated_at.format(HEADER_TIMESTAMP_FORMAT)
        ));
        lines.push(format!("Root Directory: {}", self.root.display()));

        lines.push(String::new());
        lines.push("Directory Structure:".to_string());
        lines.push(section_rule.clone());
        for entry in &self.entries {
            push_tree_lines(&mut lines, entry);
        }

        lines.push(String::new());
        lines.push("Summary:".to_string());
        lines.push(section_rule);
        lines.push(format!("Total Directories: {}", self.total_dirs));
        lines.push(format!("Total Files: {}", self.total_files));

        lines.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// One label line per entry, plus a stats line when anything was counted.
fn push_tree_lines(lines: &mut Vec<String>, entry: &DirectoryEntry) {
    let indent = INDENT.repeat(entry.depth);
    let marker = if entry.is_root() { "" } else { BRANCH_MARKER };
    lines.push(format!("{indent}{marker}{}/", entry.name));

    if let Some(stats) = stats_summary(entry.file_count, entry.subdirectory_count) {
        lines.push(format!("{indent}{STATS_PAD}({stats})"));
    }
}
