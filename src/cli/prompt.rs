//! Yes/no confirmation prompts

use std::io::{self, BufRead, Write};

use crate::error::TrackerResult;

/// Ask a yes/no question on the terminal
pub fn confirm(question: &str) -> TrackerResult<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    confirm_with(&mut stdin.lock(), &mut stdout.lock(), question)
}

/// Ask a yes/no question over arbitrary streams
///
/// Only `y` or `yes` (any case) counts as consent; end of input is a no.
pub fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> TrackerResult<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
