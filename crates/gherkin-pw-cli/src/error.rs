//! Error types for the command line shell.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced to the operator. The converter itself never fails;
/// everything here comes from configuration or file handling.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input feature file could not be read.
    #[error("error reading file {}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The generated suite could not be written.
    #[error("error writing file {}", path.display())]
    Write {
        /// Path that was written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The interactive prompt could not be read or written.
    #[error("prompt failed")]
    Prompt(#[from] io::Error),

    /// The operator answered a prompt with an empty path.
    #[error("no {0} path provided")]
    EmptyPath(&'static str),
}
