//! Read, convert and write one feature file.

use std::fs;
use std::path::Path;

use gherkin_pw::Conversion;
use tracing::{debug, info};

use crate::error::CliError;

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Test blocks written.
    pub scenarios: usize,
    /// Steps written as `// Step not mapped:` comments.
    pub unmapped_steps: usize,
}

/// Convert the feature at `input` and write the suite to `output`.
///
/// The converter runs only after the whole input has been read. A failed
/// write is reported once and not retried.
///
/// # Errors
///
/// Returns [`CliError::Read`] or [`CliError::Write`] for I/O failures.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionSummary, CliError> {
    let feature = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = feature.len(), "read feature file");

    let Conversion {
        source,
        scenarios,
        unmapped_steps,
    } = gherkin_pw::convert(&feature);

    fs::write(output, source).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        path = %output.display(),
        scenarios,
        unmapped_steps,
        "converted feature"
    );
    Ok(ConversionSummary {
        scenarios,
        unmapped_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_converted_suite() -> eyre::Result<()> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("login.feature");
        let output = workdir.path().join("login.spec.ts");
        fs::write(
            &input,
            "Feature: Login\nScenario: success\nWhen I go to the \"https://x.test\" url\nGiven nothing\n",
        )?;

        let summary = convert_file(&input, &output)?;

        assert_eq!(
            summary,
            ConversionSummary {
                scenarios: 1,
                unmapped_steps: 1,
            }
        );
        let written = fs::read_to_string(&output)?;
        assert!(written.contains("    await page.goto('https://x.test');\n"));
        Ok(())
    }

    #[test]
    fn missing_input_is_a_read_error() -> eyre::Result<()> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("absent.feature");
        let output = workdir.path().join("absent.spec.ts");
        let result = convert_file(&input, &output);
        assert!(matches!(result, Err(CliError::Read { ref path, .. }) if *path == input));
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn unwritable_output_is_a_write_error() -> eyre::Result<()> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("login.feature");
        fs::write(&input, "Feature: Login\n")?;
        let output = workdir.path().join("missing-dir").join("login.spec.ts");
        let result = convert_file(&input, &output);
        assert!(matches!(result, Err(CliError::Write { .. })));
        Ok(())
    }
}
