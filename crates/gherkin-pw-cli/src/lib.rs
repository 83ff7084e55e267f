//! File-level shell around the `gherkin-pw` converter.
//!
//! The binary reads one feature file, converts it once and writes the
//! Playwright suite. Paths come from positional arguments or, when either is
//! missing, from an interactive prompt.
//!
//! # Configuration
//!
//! - `GHERKIN_PW_LOG_LEVEL`: log verbosity (trace, debug, info, warn, error).
//!   The `--log-level` flag takes precedence.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod prompt;
