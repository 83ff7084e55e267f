//! Scan state for the document transformer.

/// Docstring delimiter. The same marker opens and closes a block.
pub const DOCSTRING_DELIMITER: &str = "\"\"\"";

/// Whether `line` opens or closes a docstring. Trailing text such as a
/// content type (`"""json`) is allowed.
#[must_use]
pub fn is_docstring_delimiter(line: &str) -> bool {
    line.starts_with(DOCSTRING_DELIMITER)
}

/// Where the scanner is in the document.
///
/// Capturing remembers whether a scenario is open so that closing the
/// docstring returns to the right state.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum ScanState {
    /// No `Scenario:` seen yet.
    #[default]
    OutsideScenario,
    /// Inside a scenario, reading steps.
    InScenario,
    /// Accumulating docstring lines.
    Capturing {
        /// A test block is open.
        in_scenario: bool,
        /// Lines read so far, each followed by a newline.
        buffer: String,
    },
}

impl ScanState {
    /// Whether a test block is open.
    #[must_use]
    pub const fn in_scenario(&self) -> bool {
        match self {
            Self::OutsideScenario => false,
            Self::InScenario => true,
            Self::Capturing { in_scenario, .. } => *in_scenario,
        }
    }

    /// State after a `Scenario:` marker. An open docstring keeps capturing.
    #[must_use]
    pub fn enter_scenario(self) -> Self {
        match self {
            Self::Capturing { buffer, .. } => Self::Capturing {
                in_scenario: true,
                buffer,
            },
            Self::OutsideScenario | Self::InScenario => Self::InScenario,
        }
    }

    /// State after an opening delimiter.
    #[must_use]
    pub fn open_docstring(self) -> Self {
        Self::Capturing {
            in_scenario: self.in_scenario(),
            buffer: String::new(),
        }
    }

    /// State after the closing delimiter, with the trimmed docstring content.
    /// Returns `None` content when no docstring was open.
    #[must_use]
    pub fn close_docstring(self) -> (Self, Option<String>) {
        match self {
            Self::Capturing {
                in_scenario,
                buffer,
            } => (
                Self::resume(in_scenario),
                Some(buffer.trim().to_string()),
            ),
            other => (other, None),
        }
    }

    const fn resume(in_scenario: bool) -> Self {
        if in_scenario {
            Self::InScenario
        } else {
            Self::OutsideScenario
        }
    }
}
