/// End-to-end tests for `ConsoleApp` — the interactive session flow.
///
/// Sessions are driven with scripted stdin (`Cursor`) and a captured
/// stdout (`Vec<u8>`) against real temporary directory trees, covering:
///   - Re-prompting on missing paths and regular files
///   - Report printing and totals
///   - Save confirmation answers and the saved file's contents
///   - Cancellation on end of input
use dirtally_console::app::{AppOptions, ConsoleApp};
use dirtally_console::input::PATH_PROMPT;
use dirtally_console::prompt::SAVE_PROMPT;
use dirtally_console::{AppError, CANCELLED_MESSAGE};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A temp workspace with a `project/` tree and an `out/` directory for reports.
///
/// ```text
/// project/
///   a.txt
///   sub/
///     b.txt
///     c.txt
/// ```
struct Workspace {
    _tmp: TempDir,
    project: PathBuf,
    out: PathBuf,
}

fn workspace() -> Workspace {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("project");
    let out = tmp.path().join("out");
    fs::create_dir_all(project.join("sub")).unwrap();
    fs::create_dir_all(&out).unwrap();
    fs::write(project.join("a.txt"), b"a").unwrap();
    fs::write(project.join("sub").join("b.txt"), b"b").unwrap();
    fs::write(project.join("sub").join("c.txt"), b"c").unwrap();
    Workspace {
        _tmp: tmp,
        project,
        out,
    }
}

fn options(out: &Path) -> AppOptions {
    AppOptions {
        output_dir: out.to_path_buf(),
        ..AppOptions::default()
    }
}

fn saved_reports(out: &Path) -> Vec<PathBuf> {
    fs::read_dir(out)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            let name = p.file_name().unwrap().to_string_lossy();
            name.starts_with("directory_structure_") && name.ends_with(".txt")
        })
        .collect()
}

/// Run one session with `script` as stdin, returning the result and transcript.
fn run_session(
    script: String,
    options: AppOptions,
) -> (Result<dirtally_console::SessionOutcome, AppError>, String) {
    let mut app = ConsoleApp::new(Cursor::new(script), Vec::new(), options);
    let result = app.run();
    let transcript = String::from_utf8(app.into_output()).unwrap();
    (result, transcript)
}

// ── Saving ────────────────────────────────────────────────────────────────────

/// "y", "Y" and "yes" all save a file identical to the printed report.
#[test]
fn affirmative_answers_save_report() {
    for answer in ["y", "Y", "yes"] {
        let ws = workspace();
        let script = format!("{}\n{answer}\n", ws.project.display());
        let (result, transcript) = run_session(script, options(&ws.out));
        let outcome = result.unwrap();

        let saved = saved_reports(&ws.out);
        assert_eq!(saved.len(), 1, "answer {answer:?} should save one file");
        assert_eq!(outcome.saved_to.as_deref(), Some(saved[0].as_path()));

        let contents = fs::read_to_string(&saved[0]).unwrap();
        assert_eq!(contents, outcome.report_text);
        assert!(
            transcript.contains(&format!("\n{contents}\n")),
            "saved text must match what was printed"
        );
        assert!(transcript.contains("\nReport saved to: "));
    }
}

/// "n" and any other answer not starting with "y" create no file.
#[test]
fn other_answers_do_not_save() {
    for answer in ["n", "no", "", "maybe"] {
        let ws = workspace();
        let script = format!("{}\n{answer}\n", ws.project.display());
        let (result, transcript) = run_session(script, options(&ws.out));
        let outcome = result.unwrap();

        assert!(outcome.saved_to.is_none());
        assert!(saved_reports(&ws.out).is_empty(), "answer {answer:?} saved a file");
        assert!(!transcript.contains("Report saved to"));
    }
}

/// `assume_save` skips the confirmation prompt entirely.
#[test]
fn assume_save_skips_confirmation() {
    let ws = workspace();
    let opts = AppOptions {
        assume_save: true,
        ..options(&ws.out)
    };
    let (result, transcript) = run_session(format!("{}\n", ws.project.display()), opts);

    assert!(result.unwrap().saved_to.is_some());
    assert!(!transcript.contains(SAVE_PROMPT.trim()));
    assert_eq!(saved_reports(&ws.out).len(), 1);
}

/// A save into a directory that does not exist is a fatal session error.
#[test]
fn save_failure_is_reported() {
    let ws = workspace();
    let opts = options(&ws.out.join("missing"));
    let (result, _) = run_session(format!("{}\ny\n", ws.project.display()), opts);

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Save(_)), "got {err:?}");
    assert!(!err.is_cancelled());
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Nonexistent paths and regular files are rejected and re-prompted.
#[test]
fn invalid_paths_are_reprompted() {
    let ws = workspace();
    let missing = ws.project.join("nope");
    let file = ws.project.join("a.txt");
    let script = format!(
        "{}\n{}\n{}\nn\n",
        missing.display(),
        file.display(),
        ws.project.display()
    );
    let (result, transcript) = run_session(script, options(&ws.out));

    let outcome = result.unwrap();
    assert_eq!(outcome.root, ws.project);
    assert!(transcript.contains(&format!(
        "Error: Directory '{}' does not exist.",
        missing.display()
    )));
    assert!(transcript.contains(&format!("Error: '{}' is not a directory.", file.display())));
    assert_eq!(transcript.matches(PATH_PROMPT).count(), 3);
}

/// An initial path from the command line bypasses the prompt.
#[test]
fn initial_path_skips_prompt() {
    let ws = workspace();
    let opts = AppOptions {
        initial_path: Some(ws.project.display().to_string()),
        ..options(&ws.out)
    };
    let (result, transcript) = run_session("n\n".to_string(), opts);

    assert!(result.is_ok());
    assert!(!transcript.contains(PATH_PROMPT));
}

// ── Report ────────────────────────────────────────────────────────────────────

#[test]
fn report_is_printed_with_totals() {
    let ws = workspace();
    let (result, transcript) =
        run_session(format!("{}\nn\n", ws.project.display()), options(&ws.out));
    let outcome = result.unwrap();

    assert_eq!(outcome.total_files, 3);
    assert_eq!(outcome.total_dirs, 1);
    assert!(transcript.contains("\nProject Directory Structure Report\n"));
    assert!(transcript.contains("project/\n   (1 file, 1 dir)\n  └──sub/\n     (2 files)\n"));
    assert!(transcript.contains("Total Directories: 1\nTotal Files: 3"));
    assert!(transcript.ends_with(SAVE_PROMPT));
}

// ── Cancellation ──────────────────────────────────────────────────────────────

/// End of input at the path prompt cancels the session.
#[test]
fn end_of_input_at_path_prompt_cancels() {
    let ws = workspace();
    let (result, _) = run_session(String::new(), options(&ws.out));

    let err = result.unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(err.to_string(), CANCELLED_MESSAGE);
}

/// End of input at the save prompt cancels too, and nothing is written.
#[test]
fn end_of_input_at_save_prompt_cancels() {
    let ws = workspace();
    let (result, transcript) =
        run_session(format!("{}\n", ws.project.display()), options(&ws.out));

    assert!(result.unwrap_err().is_cancelled());
    assert!(transcript.contains("Total Files: 3"));
    assert!(saved_reports(&ws.out).is_empty());
}
