//! Feature document to Playwright suite conversion.
//!
//! A single forward pass over trimmed lines. Each line is classified in this
//! order:
//!
//! 1. `Scenario:` marker: close the open test, open a new one.
//! 2. Docstring delimiter (`"""`): toggle capture.
//! 3. Line inside a docstring: buffered.
//! 4. Step line (`Given`, `When`, `Then` or `And`): translated through the
//!    [catalog](crate::catalog), consuming the pending docstring.
//! 5. Anything else: ignored.
//!
//! A closed docstring is pending until the next step line takes it, whether
//! or not that step uses it. Opening another docstring discards it.

mod document;
mod state;

use gherkin_pw_patterns::StepKeyword;
use tracing::{debug, warn};

use crate::catalog::translate;
use document::SuiteWriter;

pub use document::{FALLBACK_FEATURE_NAME, feature_name};
pub use state::{DOCSTRING_DELIMITER, ScanState, is_docstring_delimiter};

const SCENARIO_MARKER: &str = "Scenario:";

/// Generated suite plus counts gathered while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Playwright source text.
    pub source: String,
    /// Number of test blocks emitted.
    pub scenarios: usize,
    /// Number of step lines rendered as `// Step not mapped:` comments.
    pub unmapped_steps: usize,
}

/// Convert a feature document, returning the suite and scan statistics.
#[must_use]
pub fn convert(input: &str) -> Conversion {
    let mut scanner = Scanner::new(&feature_name(input.lines().next()));
    for line in input.lines() {
        scanner.feed(line.trim());
    }
    scanner.finish()
}

/// Convert a feature document into Playwright test source.
///
/// Never fails: unknown or malformed steps become comments and the output
/// always has balanced suite and test blocks.
///
/// # Examples
///
/// ```
/// let suite = gherkin_pw::convert_feature("Feature: Empty\n");
/// assert!(suite.starts_with("import { test, expect } from '@playwright/test';"));
/// assert!(suite.contains("test.describe('Empty', () => {"));
/// assert!(!suite.contains("async ({ page }) => {\n    await"));
/// ```
#[must_use]
pub fn convert_feature(input: &str) -> String {
    convert(input).source
}

/// Per-invocation scan state.
#[derive(Debug)]
struct Scanner {
    state: ScanState,
    pending: Option<String>,
    writer: SuiteWriter,
    unmapped_steps: usize,
}

impl Scanner {
    fn new(feature_name: &str) -> Self {
        Self {
            state: ScanState::default(),
            pending: None,
            writer: SuiteWriter::new(feature_name),
            unmapped_steps: 0,
        }
    }

    fn feed(&mut self, line: &str) {
        if let Some(name) = line.strip_prefix(SCENARIO_MARKER) {
            self.writer.open_test(name.trim());
            self.state = std::mem::take(&mut self.state).enter_scenario();
            return;
        }

        let state = std::mem::take(&mut self.state);
        self.state = match state {
            ScanState::Capturing { .. } if is_docstring_delimiter(line) => {
                let (next, content) = state.close_docstring();
                self.pending = content;
                next
            }
            ScanState::Capturing {
                in_scenario,
                mut buffer,
            } => {
                buffer.push_str(line);
                buffer.push('\n');
                ScanState::Capturing {
                    in_scenario,
                    buffer,
                }
            }
            idle => {
                if is_docstring_delimiter(line) {
                    if self.pending.take().is_some() {
                        debug!("discarding unconsumed docstring");
                    }
                    idle.open_docstring()
                } else {
                    if let Some(keyword) = StepKeyword::from_line_prefix(line) {
                        self.step(keyword, line, idle.in_scenario());
                    }
                    idle
                }
            }
        };
    }

    fn step(&mut self, keyword: StepKeyword, line: &str, in_scenario: bool) {
        let docstring = self.pending.take();
        if !in_scenario {
            warn!(%keyword, line, "step outside a scenario ignored");
            return;
        }
        let translation = translate(line, docstring.as_deref());
        if translation.is_unmapped() {
            self.unmapped_steps += 1;
        }
        self.writer.push_statement(translation.as_line());
    }

    fn finish(self) -> Conversion {
        if let ScanState::Capturing { buffer, .. } = &self.state {
            debug!(bytes = buffer.len(), "unterminated docstring discarded");
        }
        let scenarios = self.writer.tests();
        Conversion {
            source: self.writer.finish(),
            scenarios,
            unmapped_steps: self.unmapped_steps,
        }
    }
}
