//! Ordered step catalog.
//!
//! [`CATALOG`] is scanned in declaration order and the first entry whose
//! phrase occurs anywhere in a step line is selected. Later entries are never
//! consulted for that line, even when their phrase also occurs in it. The
//! phrase test is plain substring containment and ignores the step keyword.

mod expectation;
mod steps;

use gherkin_pw_patterns::ExtractionError;
use regex::Regex;
use tracing::{debug, trace};

pub use expectation::{Condition, render_expectation};

/// Translation rule selected by a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepAction {
    /// Assert visibility, text or class of a located element.
    ExpectElement,
    /// Navigate the page to a URL.
    Navigate,
    /// Register a fulfilled network route.
    MockRoute,
    /// Clear cookies, naming the one the step asked for.
    DeleteCookie,
    /// Placeholder for an authenticated session.
    AuthenticatedUser,
    /// Placeholder for European locale settings.
    EuropeanUser,
    /// Check a named radio input.
    SelectRadio,
    /// Fill a named field.
    FillField,
    /// Submit a form located by selector.
    SubmitForm,
    /// Click a button located by selector.
    ClickButton,
    /// Note that a mocked route should have been called.
    VerifyMock,
}

/// A phrase and the action it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Text that must occur in the step line for this entry to apply.
    pub phrase: &'static str,
    /// Rule that renders the step.
    pub action: StepAction,
}

impl CatalogEntry {
    const fn new(phrase: &'static str, action: StepAction) -> Self {
        Self { phrase, action }
    }

    /// Render `line` with this entry's rule.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] when the entry's own pattern cannot
    /// find the parameters it needs in `line`.
    pub fn render(&self, line: &str, docstring: Option<&str>) -> Result<String, ExtractionError> {
        let phrase = self.phrase;
        match self.action {
            StepAction::ExpectElement => steps::expect_element(phrase, line),
            StepAction::Navigate => steps::navigate(phrase, line),
            StepAction::MockRoute => steps::mock_route(phrase, line, docstring),
            StepAction::DeleteCookie => steps::delete_cookie(phrase, line),
            StepAction::AuthenticatedUser => Ok(steps::AUTHENTICATED_USER.to_string()),
            StepAction::EuropeanUser => Ok(steps::EUROPEAN_USER.to_string()),
            StepAction::SelectRadio => steps::select_radio(phrase, line),
            StepAction::FillField => steps::fill_field(phrase, line),
            StepAction::SubmitForm => steps::submit_form(phrase, line),
            StepAction::ClickButton => steps::click_button(phrase, line),
            StepAction::VerifyMock => steps::verify_mock(phrase, line),
        }
    }
}

/// Built-in step vocabulary. Order is significant: see [`select_entry`].
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry::new("Then I expect that element", StepAction::ExpectElement),
    CatalogEntry::new("When I go to the", StepAction::Navigate),
    CatalogEntry::new("Given I mock", StepAction::MockRoute),
    CatalogEntry::new("And I delete the cookie", StepAction::DeleteCookie),
    CatalogEntry::new("And I am an authenticated user", StepAction::AuthenticatedUser),
    CatalogEntry::new("And I am a european user", StepAction::EuropeanUser),
    CatalogEntry::new("When I select the", StepAction::SelectRadio),
    CatalogEntry::new("When I fill in the", StepAction::FillField),
    CatalogEntry::new("And I submit the form", StepAction::SubmitForm),
    CatalogEntry::new("When I click on the", StepAction::ClickButton),
    CatalogEntry::new("Then I expect that mock", StepAction::VerifyMock),
];

/// Outcome of translating one step line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// A catalog entry rendered the step.
    Statement(String),
    /// No entry applied, or the selected entry could not extract its
    /// parameters. Holds the diagnostic comment.
    Unmapped(String),
}

impl Translation {
    /// Line of output text for this translation.
    #[must_use]
    pub fn as_line(&self) -> &str {
        match self {
            Self::Statement(line) | Self::Unmapped(line) => line,
        }
    }

    /// Consume the translation, returning its output line.
    #[must_use]
    pub fn into_line(self) -> String {
        match self {
            Self::Statement(line) | Self::Unmapped(line) => line,
        }
    }

    /// Whether this is the diagnostic fallback.
    #[must_use]
    pub const fn is_unmapped(&self) -> bool {
        matches!(self, Self::Unmapped(_))
    }
}

/// Select the first catalog entry whose phrase occurs in `line`.
///
/// # Examples
///
/// ```
/// use gherkin_pw::catalog::select_entry;
/// use gherkin_pw::StepAction;
///
/// let entry = select_entry("When I go to the \"https://x.test\" url");
/// assert_eq!(entry.map(|e| e.action), Some(StepAction::Navigate));
/// assert!(select_entry("Given something unknown").is_none());
/// ```
#[must_use]
pub fn select_entry(line: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| {
        let hit = line.contains(entry.phrase);
        trace!(phrase = entry.phrase, line, hit, "probing step phrase");
        hit
    })
}

/// Translate one step line, falling back to a diagnostic comment.
#[must_use]
pub fn translate(line: &str, docstring: Option<&str>) -> Translation {
    let Some(entry) = select_entry(line) else {
        debug!(line, "no step phrase matched");
        return Translation::Unmapped(not_mapped(line));
    };
    entry.render(line, docstring).map_or_else(
        |err| {
            debug!(line, error = %err, "step parameters could not be extracted");
            Translation::Unmapped(not_mapped(line))
        },
        Translation::Statement,
    )
}

/// Translate one step line into a single line of Playwright code.
///
/// # Examples
///
/// ```
/// use gherkin_pw::translate_step;
///
/// assert_eq!(
///     translate_step("When I click on the \"#save\" button", None),
///     "await page.click('#save');"
/// );
/// assert_eq!(
///     translate_step("Given the moon is full", None),
///     "// Step not mapped: Given the moon is full"
/// );
/// ```
#[must_use]
pub fn translate_step(line: &str, docstring: Option<&str>) -> String {
    translate(line, docstring).into_line()
}

/// Diagnostic comment emitted for a step that could not be translated.
#[must_use]
pub fn not_mapped(line: &str) -> String {
    format!("// Step not mapped: {line}")
}

#[expect(
    clippy::expect_used,
    reason = "catalog patterns are string literals exercised by the test suite"
)]
fn step_regex(source: &'static str) -> Regex {
    Regex::new(source).expect("catalog pattern must compile")
}
