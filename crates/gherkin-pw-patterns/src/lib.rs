//! Shared step-matching utilities for gherkin-pw.
//!
//! The crate exposes the step keyword type and the regex capture helpers used
//! by the step catalog, so that every catalog entry extracts its parameters
//! through the same fallible code path.

mod capture;
mod errors;
mod keyword;

pub use capture::StepCaptures;
pub use errors::ExtractionError;
pub use keyword::StepKeyword;
