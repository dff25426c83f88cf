/// The interactive session: prompt → analyse → render → (optional) save.
///
/// `ConsoleApp` owns the input and output streams for one run. The binary
/// wires it to stdin/stdout; tests drive it with in-memory buffers.
use crate::input::resolve_directory;
use crate::prompt::{confirm_save, PromptError};
use chrono::Local;
use dirtally_core::report::{save_report, Report, ReportError};
use dirtally_core::scanner::{analyze_directory, ScanError, ScanOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Settings for one session.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Path to try before prompting.
    pub initial_path: Option<String>,
    pub scan: ScanOptions,
    /// Directory saved reports are written into.
    pub output_dir: PathBuf,
    /// Save without asking.
    pub assume_save: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_path: None,
            scan: ScanOptions::default(),
            output_dir: PathBuf::from("."),
            assume_save: false,
        }
    }
}

/// Anything that ends a session early.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Save(#[from] ReportError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// `true` if the user backed out at a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Prompt(PromptError::Cancelled))
    }
}

/// What a completed session produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub root: PathBuf,
    /// The report exactly as printed.
    pub report_text: String,
    pub total_files: u64,
    pub total_dirs: u64,
    /// Where the report was saved, if it was.
    pub saved_to: Option<PathBuf>,
}

pub struct ConsoleApp<R, W> {
    input: R,
    output: W,
    options: AppOptions,
}

impl<R: BufRead, W: Write> ConsoleApp<R, W> {
    pub fn new(input: R, output: W, options: AppOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Run the whole session once.
    pub fn run(&mut self) -> Result<SessionOutcome, AppError> {
        let root = resolve_directory(
            &mut self.input,
            &mut self.output,
            self.options.initial_path.as_deref(),
        )?;

        let entries = analyze_directory(&root, &self.options.scan)?;
        let report = Report::new(&root, entries);
        let report_text = report.render();
        writeln!(self.output, "\n{report_text}")?;

        let save = self.options.assume_save || confirm_save(&mut self.input, &mut self.output)?;
        let saved_to = if save {
            let path = save_report(&report_text, &self.options.output_dir, Local::now())?;
            writeln!(self.output, "\nReport saved to: {}", path.display())?;
            Some(path)
        } else {
            info!("Report not saved");
            None
        };
        self.output.flush()?;

        Ok(SessionOutcome {
            root,
            total_files: report.total_files(),
            total_dirs: report.total_dirs(),
            report_text,
            saved_to,
        })
    }

    /// Give back the output stream, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}
