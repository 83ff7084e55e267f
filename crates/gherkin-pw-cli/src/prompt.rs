//! Interactive path prompt used when arguments are missing.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::CliError;

/// Question asked for the feature file.
pub const INPUT_QUESTION: &str = "Please provide the path to the input Cucumber feature file: ";
/// Question asked for the generated test file.
pub const OUTPUT_QUESTION: &str = "Please provide the path to the output Playwright test file: ";

/// Ask for the input and output paths, in that order.
///
/// # Errors
///
/// Returns [`CliError::Prompt`] if the streams fail and
/// [`CliError::EmptyPath`] if an answer is blank or the input ends early.
pub fn prompt_paths<R, W>(input: &mut R, output: &mut W) -> Result<(PathBuf, PathBuf), CliError>
where
    R: BufRead,
    W: Write,
{
    let source = ask(input, output, INPUT_QUESTION, "input")?;
    let target = ask(input, output, OUTPUT_QUESTION, "output")?;
    Ok((source, target))
}

fn ask<R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    role: &'static str,
) -> Result<PathBuf, CliError>
where
    R: BufRead,
    W: Write,
{
    output.write_all(question.as_bytes())?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CliError::EmptyPath(role));
    }
    Ok(PathBuf::from(answer))
}
