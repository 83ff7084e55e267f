//! Public API smoke tests for the shared pattern helpers.

use gherkin_pw_patterns::{ExtractionError, StepCaptures, StepKeyword};
use regex::Regex;

#[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
fn regex(src: &str) -> Regex {
    Regex::new(src).expect("test regex must compile")
}

#[test]
fn extracts_method_and_url_in_order() {
    let re = regex(r#""([^"]+)" "([^"]+)""#);
    let Ok(caps) = StepCaptures::extract(
        &re,
        "Given I mock",
        r#"Given I mock "POST" "https://api.test/users""#,
    ) else {
        panic!("expected mock target to match");
    };
    assert_eq!(caps.required(0), Ok("POST"));
    assert_eq!(caps.required(1), Ok("https://api.test/users"));
}

#[test]
fn step_captures_report_the_selecting_phrase() {
    let re = regex(r#"mock "([^"]+)" was called"#);
    let Err(err) = StepCaptures::extract(&re, "Then I expect that mock", "Then I expect that mock")
    else {
        panic!("expected extraction to fail");
    };
    assert!(matches!(
        err,
        ExtractionError::NoMatch {
            phrase: "Then I expect that mock",
            ..
        }
    ));
    assert!(err.to_string().contains("was called"));
}

#[test]
fn keyword_detection_ignores_description_lines() {
    assert_eq!(StepKeyword::from_line_prefix("As a shopper"), None);
    assert_eq!(
        StepKeyword::from_line_prefix("Then I expect that element \"#x\" does exist"),
        Some(StepKeyword::Then)
    );
    assert_eq!(StepKeyword::from_line_prefix("But the cart is empty"), None);
}
