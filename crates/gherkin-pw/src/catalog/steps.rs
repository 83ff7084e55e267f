//! Parameter extraction and rendering for each catalog entry.

use std::sync::LazyLock;

use gherkin_pw_patterns::{ExtractionError, StepCaptures};
use regex::Regex;
use tracing::trace;

use super::expectation::render_expectation;
use super::step_regex;
use crate::js::escape_js;

pub(super) const AUTHENTICATED_USER: &str =
    "// Simulate user authentication (e.g., set cookies or tokens)";
pub(super) const EUROPEAN_USER: &str =
    "// Simulate user with European settings (e.g., setting localization preferences)";

const DEFAULT_STATUS: &str = "200";

static EXPECTATION: LazyLock<Regex> = LazyLock::new(|| {
    step_regex(
        r#""([^"]+)" (does not exist|does exist|does not have the class|has the class|matches the text|contains the text)(?: "?(.*?)"?)?$"#,
    )
});
// Fallback used to name a condition the table above does not know.
static ANY_CONDITION: LazyLock<Regex> =
    LazyLock::new(|| step_regex(r#""([^"]+)" ([^"]*?)\s*(?:"|$)"#));
static NAVIGATION: LazyLock<Regex> = LazyLock::new(|| step_regex(r#"the "([^"]+)" url"#));
static MOCK_TARGET: LazyLock<Regex> = LazyLock::new(|| step_regex(r#""([^"]+)" "([^"]+)""#));
static MOCK_STATUS: LazyLock<Regex> = LazyLock::new(|| step_regex(r"with status (\d+)"));
static QUOTED: LazyLock<Regex> = LazyLock::new(|| step_regex(r#""([^"]+)""#));
static RADIO: LazyLock<Regex> = LazyLock::new(|| step_regex(r#"the "([^"]+)" radio input"#));
static FIELD: LazyLock<Regex> =
    LazyLock::new(|| step_regex(r#"the "([^"]+)" field with "([^"]+)""#));
static FORM: LazyLock<Regex> = LazyLock::new(|| step_regex(r#"form "([^"]+)""#));
static BUTTON: LazyLock<Regex> = LazyLock::new(|| step_regex(r#""([^"]+)" button"#));
static MOCK_CALLED: LazyLock<Regex> = LazyLock::new(|| step_regex(r#"mock "([^"]+)" was called"#));

pub(super) fn expect_element(phrase: &'static str, line: &str) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&EXPECTATION, phrase, line).or_else(|known| {
        // Name the unknown condition instead of dropping the whole step.
        let caps = StepCaptures::extract(&ANY_CONDITION, phrase, line).map_err(|_| known.clone())?;
        if caps.optional(1).is_some_and(|condition| !condition.is_empty()) {
            Ok(caps)
        } else {
            Err(known)
        }
    })?;
    let selector = caps.required(0)?;
    let condition = caps.required(1)?;
    let text = caps.optional(2).unwrap_or_default();
    Ok(render_expectation(selector, condition, text))
}

pub(super) fn navigate(phrase: &'static str, line: &str) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&NAVIGATION, phrase, line)?;
    Ok(format!("await page.goto('{}');", escape_js(caps.required(0)?)))
}

pub(super) fn mock_route(
    phrase: &'static str,
    line: &str,
    docstring: Option<&str>,
) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&MOCK_TARGET, phrase, line)?;
    let method = caps.required(0)?;
    let url = caps.required(1)?;
    let status = StepCaptures::extract(&MOCK_STATUS, phrase, line)
        .ok()
        .and_then(|status| status.optional(0).map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_STATUS.to_owned());
    // Playwright routes match every method; the step's method is informational.
    trace!(method, url, status = %status, "registering mocked route");
    // The body is a template literal and goes out as written.
    Ok(format!(
        "await page.route('{}', (route) => route.fulfill({{ status: {status}, body: `{}` }}));",
        escape_js(url),
        docstring.unwrap_or_default()
    ))
}

pub(super) fn delete_cookie(phrase: &'static str, line: &str) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&QUOTED, phrase, line)?;
    Ok(format!(
        "await page.context().clearCookies(); // Clear the '{}' cookie",
        caps.required(0)?
    ))
}

pub(super) fn select_radio(phrase: &'static str, line: &str) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&RADIO, phrase, line)?;
    Ok(format!(
        "await page.check('input[name=\"{}\"]');",
        escape_js(caps.required(0)?)
    ))
}

pub(super) fn fill_field(phrase: &'static str, line: &str) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&FIELD, phrase, line)?;
    Ok(format!(
        "await page.fill('[name=\"{}\"]', '{}');",
        escape_js(caps.required(0)?),
        escape_js(caps.required(1)?)
    ))
}

pub(super) fn submit_form(phrase: &'static str, line: &str) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&FORM, phrase, line)?;
    Ok(format!(
        "await page.locator('{}').submit();",
        escape_js(caps.required(0)?)
    ))
}

pub(super) fn click_button(phrase: &'static str, line: &str) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&BUTTON, phrase, line)?;
    Ok(format!("await page.click('{}');", escape_js(caps.required(0)?)))
}

pub(super) fn verify_mock(phrase: &'static str, line: &str) -> Result<String, ExtractionError> {
    let caps = StepCaptures::extract(&MOCK_CALLED, phrase, line)?;
    Ok(format!(
        "// Verify that the route for '{}' was called (Playwright does not have direct mock verification)",
        caps.required(0)?
    ))
}
