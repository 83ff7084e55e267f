//! Error types shared by the extraction helpers.

use thiserror::Error;

/// Errors surfaced while pulling parameters out of a matched step line.
///
/// A catalog entry is selected by phrase containment alone, so the secondary
/// pattern that extracts its parameters may still fail. Callers turn these
/// errors into diagnostic output instead of aborting.
///
/// # Examples
/// ```
/// use gherkin_pw_patterns::ExtractionError;
/// let err = ExtractionError::MissingCapture { phrase: "When I go to the", index: 0 };
/// assert_eq!(
///     err.to_string(),
///     "capture 0 missing for step phrase `When I go to the`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The secondary pattern did not match the step line at all.
    #[error("step phrase `{phrase}` matched but pattern `{pattern}` did not")]
    NoMatch {
        /// Catalog phrase that selected the entry.
        phrase: &'static str,
        /// Source of the extraction regex.
        pattern: String,
    },
    /// The pattern matched but a required group did not participate.
    #[error("capture {index} missing for step phrase `{phrase}`")]
    MissingCapture {
        /// Catalog phrase that selected the entry.
        phrase: &'static str,
        /// Zero-based index of the capture group, excluding the full match.
        index: usize,
    },
}
