/// Input resolution — turns what the user typed into a validated directory.
///
/// Empty input means the current directory. A leading `~` or `~user` is
/// expanded to a home directory, then the path must exist and be a directory. Anything else prints a diagnostic and asks again,
/// with no retry limit.
use crate::prompt::{ask, PromptError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const PATH_PROMPT: &str = "Enter the full path to your project directory: ";

/// Why a typed path was rejected. The display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathProblem {
    #[error("Error: Directory '{0}' does not exist.")]
    Missing(String),

    #[error("Error: '{0}' is not a directory.")]
    NotADirectory(String),
}

/// Expand `~`, `~/...` and `~user/...`.
///
/// Inputs without a leading `~` are returned unchanged, as is anything whose
/// home directory cannot be determined.
pub fn expand_home(raw: &str) -> PathBuf {
    let home = dirs::home_dir();
    expand_home_with(raw, home.as_deref(), |user| user_home(user, home.as_deref()))
}

fn expand_home_with(
    raw: &str,
    home: Option<&Path>,
    user_home: impl FnOnce(&str) -> Option<PathBuf>,
) -> PathBuf {
    let Some(rest) = raw.strip_prefix('~') else {
        return PathBuf::from(raw);
    };
    let (user, tail) = match rest.find(std::path::is_separator) {
        Some(at) => (&rest[..at], &rest[at + 1..]),
        None => (rest, ""),
    };
    let base = if user.is_empty() {
        home.map(Path::to_path_buf)
    } else {
        user_home(user)
    };
    match base {
        Some(base) if tail.is_empty() => base,
        Some(base) => base.join(tail),
        None => PathBuf::from(raw),
    }
}

/// Home directory of another account, from the password database.
#[cfg(unix)]
fn user_home(user: &str, _home: Option<&Path>) -> Option<PathBuf> {
    let passwd = std::fs::read_to_string("/etc/passwd").ok()?;
    passwd_home(&passwd, user)
}

/// Home directory of another account, assumed to sit next to ours.
#[cfg(not(unix))]
fn user_home(user: &str, home: Option<&Path>) -> Option<PathBuf> {
    Some(home?.parent()?.join(user))
}

/// `name:password:uid:gid:gecos:home:shell`
#[cfg_attr(not(unix), allow(dead_code))]
fn passwd_home(passwd: &str, user: &str) -> Option<PathBuf> {
    passwd
        .lines()
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| {
            let mut fields = line.split(':');
            if fields.next()? != user {
                return None;
            }
            let home = fields.nth(4)?;
            (!home.is_empty()).then(|| PathBuf::from(home))
        })
}

/// Validate one line of user input.
pub fn validate_directory(raw: &str) -> Result<PathBuf, PathProblem> {
    let raw = match raw.trim() {
        "" => ".",
        trimmed => trimmed,
    };

    let path = expand_home(raw);
    match std::fs::metadata(&path) {
        Err(_) => Err(PathProblem::Missing(path.display().to_string())),
        Ok(meta) if !meta.is_dir() => Err(PathProblem::NotADirectory(path.display().to_string())),
        Ok(_) => Ok(path),
    }
}

/// Prompt until the user names an existing directory.
///
/// `initial` (e.g. from the command line) is tried first; if it is rejected
/// its diagnostic is printed and the interactive loop takes over.
pub fn resolve_directory<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    initial: Option<&str>,
) -> Result<PathBuf, PromptError> {
    if let Some(raw) = initial {
        match validate_directory(raw) {
            Ok(path) => return Ok(path),
            Err(problem) => reject(output, &problem)?,
        }
    }

    loop {
        let raw = ask(input, output, PATH_PROMPT)?;
        match validate_directory(&raw) {
            Ok(path) => {
                debug!("Resolved root directory {}", path.display());
                return Ok(path);
            }
            Err(problem) => reject(output, &problem)?,
        }
    }
}

fn reject<W: Write>(output: &mut W, problem: &PathProblem) -> Result<(), PromptError> {
    debug!("Rejected directory input: {problem:?}");
    writeln!(output, "{problem}")?;
    Ok(())
}
