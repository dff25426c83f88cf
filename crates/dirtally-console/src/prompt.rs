/// Line-based console prompts.
///
/// Prompts are generic over `BufRead`/`Write` so sessions can be driven from
/// in-memory buffers in tests. End of input is treated as the user backing
/// out, the same as an interrupt.
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const CANCELLED_MESSAGE: &str = "Operation cancelled by user.";

pub const SAVE_PROMPT: &str = "\nWould you like to save this report to a file? (y/n): ";

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended before an answer was given.
    #[error("{}", CANCELLED_MESSAGE)]
    Cancelled,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Print `prompt`, read one line, and return it trimmed.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, PromptError> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Cancelled);
    }
    Ok(line.trim().to_string())
}

/// Ask whether the report should be written to a file.
pub fn confirm_save<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool, PromptError> {
    let answer = ask(input, output, SAVE_PROMPT)?;
    Ok(is_affirmative(&answer))
}

/// Any answer starting with `y`, ignoring case, means yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}
