//! dirtally — interactive directory structure reporter.
//!
//! Thin binary entry point. All logic lives in the `dirtally-core`
//! and `dirtally-console` crates.

use anyhow::ensure;
use clap::{ArgAction, Parser};
use dirtally_console::{AppError, AppOptions, ConsoleApp, CANCELLED_MESSAGE};
use dirtally_core::{IgnoreSet, ScanOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "dirtally",
    version,
    about = "Count files and folders at every level of a directory tree and print a report",
    long_about = None
)]
struct Cli {
    /// Directory to analyse (prompted for when omitted or invalid)
    path: Option<String>,

    /// Extra file or directory name to ignore; may be repeated
    #[arg(long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Do not ignore .DS_Store, .git, __pycache__ and .pytest_cache
    #[arg(long)]
    no_default_ignores: bool,

    /// Directory saved reports are written into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Save the report without asking
    #[arg(short = 'y', long)]
    save: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_options(self) -> AppOptions {
        let mut ignore = if self.no_default_ignores {
            IgnoreSet::empty()
        } else {
            IgnoreSet::default()
        };
        ignore.extend(self.ignore);

        AppOptions {
            initial_path: self.path,
            scan: ScanOptions::default().with_ignore(ignore),
            output_dir: self.output_dir,
            assume_save: self.save,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Prompts block in read_line, so an interrupt ends the process directly.
    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n{CANCELLED_MESSAGE}");
        std::process::exit(1);
    }) {
        tracing::warn!("Could not install interrupt handler: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cancelled = err
                .downcast_ref::<AppError>()
                .is_some_and(AppError::is_cancelled);
            if cancelled {
                println!("\n{CANCELLED_MESSAGE}");
            } else {
                println!("\nAn error occurred: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    ensure!(
        cli.output_dir.is_dir(),
        "output directory '{}' does not exist",
        cli.output_dir.display()
    );

    let options = cli.into_options();
    tracing::debug!(
        "Ignoring {} names, saving into {}",
        options.scan.ignore.len(),
        options.output_dir.display()
    );

    // stdout stays unlocked so the interrupt handler can still print.
    let mut app = ConsoleApp::new(std::io::stdin().lock(), std::io::stdout(), options);
    let outcome = app.run()?;
    tracing::info!(
        "Finished {}: {} directories, {} files",
        outcome.root.display(),
        outcome.total_dirs,
        outcome.total_files
    );
    Ok(())
}
