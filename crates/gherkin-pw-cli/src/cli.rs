//! Argument parsing and command dispatch for the `gherkin-pw` binary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};

use crate::config::{CliConfig, LogLevel};
use crate::convert::{ConversionSummary, convert_file};
use crate::error::CliError;
use crate::prompt::prompt_paths;

/// Convert a Gherkin feature file into a Playwright test file.
///
/// When either path is omitted, both are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "gherkin-pw", version, about)]
pub struct Cli {
    /// Feature file to convert.
    pub input: Option<PathBuf>,
    /// Playwright test file to write.
    pub output: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Environment configuration with command line overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidConfig`] for unparsable environment values.
    pub fn build_config(&self) -> Result<CliConfig, CliError> {
        Ok(CliConfig::from_env()?.apply_overrides(self.log_level))
    }

    /// Both paths from the arguments, or both from the prompt.
    ///
    /// # Errors
    ///
    /// Propagates prompt failures.
    pub fn resolve_paths<R, W>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(PathBuf, PathBuf), CliError>
    where
        R: BufRead,
        W: Write,
    {
        match (&self.input, &self.output) {
            (Some(source), Some(target)) => Ok((source.clone(), target.clone())),
            _ => prompt_paths(input, output),
        }
    }
}

/// Resolve paths and convert the feature file.
///
/// # Errors
///
/// Returns an error if the paths cannot be obtained or the files cannot be
/// read or written.
pub fn run(cli: &Cli) -> Result<ConversionSummary> {
    let (input, output) = cli
        .resolve_paths(&mut io::stdin().lock(), &mut io::stdout())
        .wrap_err("failed to obtain file paths")?;
    Ok(convert_file(&input, &output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[test]
    fn parses_positional_paths_and_level() -> eyre::Result<()> {
        let cli = Cli::try_parse_from([
            "gherkin-pw",
            "login.feature",
            "login.spec.ts",
            "--log-level",
            "debug",
        ])?;
        assert_eq!(cli.input, Some(PathBuf::from("login.feature")));
        assert_eq!(cli.output, Some(PathBuf::from("login.spec.ts")));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        Ok(())
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["gherkin-pw", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn uses_arguments_without_prompting() -> eyre::Result<()> {
        let cli = Cli::try_parse_from(["gherkin-pw", "a.feature", "a.spec.ts"])?;
        let mut prompt_out = Vec::new();
        let paths = cli.resolve_paths(&mut Cursor::new(""), &mut prompt_out)?;
        assert_eq!(
            paths,
            (PathBuf::from("a.feature"), PathBuf::from("a.spec.ts"))
        );
        assert!(prompt_out.is_empty());
        Ok(())
    }

    #[rstest]
    #[case(&["gherkin-pw"])]
    #[case(&["gherkin-pw", "only-input.feature"])]
    fn prompts_for_both_when_any_is_missing(#[case] args: &[&str]) -> eyre::Result<()> {
        let cli = Cli::try_parse_from(args)?;
        let mut answers = Cursor::new("b.feature\nb.spec.ts\n");
        let mut prompt_out = Vec::new();
        let paths = cli.resolve_paths(&mut answers, &mut prompt_out)?;
        assert_eq!(
            paths,
            (PathBuf::from("b.feature"), PathBuf::from("b.spec.ts"))
        );
        assert!(!prompt_out.is_empty());
        Ok(())
    }
}
