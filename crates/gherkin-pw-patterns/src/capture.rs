//! Regex capture helpers used by the step catalog.

use regex::Regex;

use crate::ExtractionError;

/// Captured parameters of one step line, tagged with the phrase that
/// selected the catalog entry so failures can name it.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use gherkin_pw_patterns::StepCaptures;
/// let re = Regex::new(r#"the "([^"]+)" field with "([^"]+)""#)
///     .expect("example ensures fallible call succeeds");
/// let caps = StepCaptures::extract(
///     &re,
///     "When I fill in the",
///     r#"When I fill in the "email" field with "a@b.test""#,
/// )
/// .expect("example ensures fallible call succeeds");
/// assert_eq!(caps.required(0).ok(), Some("email"));
/// assert_eq!(caps.required(1).ok(), Some("a@b.test"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCaptures {
    phrase: &'static str,
    values: Vec<Option<String>>,
}

impl StepCaptures {
    /// Match `re` against `line` and collect its groups.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::NoMatch`] when the pattern does not match.
    pub fn extract(re: &Regex, phrase: &'static str, line: &str) -> Result<Self, ExtractionError> {
        let caps = re.captures(line).ok_or_else(|| ExtractionError::NoMatch {
            phrase,
            pattern: re.as_str().to_string(),
        })?;
        let values = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();
        Ok(Self { phrase, values })
    }

    /// Return the group at `index`, failing when it did not participate.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::MissingCapture`] for absent groups.
    pub fn required(&self, index: usize) -> Result<&str, ExtractionError> {
        self.optional(index)
            .ok_or(ExtractionError::MissingCapture {
                phrase: self.phrase,
                index,
            })
    }

    /// Return the group at `index` when it participated in the match.
    #[must_use]
    pub fn optional(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(Option::as_deref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "tests require descriptive panic messages")]
    fn regex(src: &str) -> Regex {
        Regex::new(src).expect("test regex must compile")
    }

    #[test]
    fn non_participating_groups_keep_their_position() {
        let Ok(caps) = StepCaptures::extract(&regex(r"^(a)?(b)?(c)$"), "Given I mock", "ac") else {
            panic!("expected pattern to match");
        };
        assert_eq!(caps.optional(0), Some("a"));
        assert_eq!(caps.optional(1), None);
        assert_eq!(caps.optional(2), Some("c"));
    }

    #[test]
    fn extract_reports_pattern_on_mismatch() {
        let re = regex(r#"form "([^"]+)""#);
        let err = StepCaptures::extract(&re, "And I submit the form", "And I submit the form")
            .err();
        assert_eq!(
            err,
            Some(ExtractionError::NoMatch {
                phrase: "And I submit the form",
                pattern: re.as_str().to_string(),
            })
        );
    }

    #[test]
    fn required_fails_for_non_participating_group() {
        let re = regex(r"status (\d+)?(x)?");
        let Ok(caps) = StepCaptures::extract(&re, "Given I mock", "with status 404") else {
            panic!("expected pattern to match");
        };
        assert_eq!(caps.required(0), Ok("404"));
        assert_eq!(
            caps.required(1),
            Err(ExtractionError::MissingCapture {
                phrase: "Given I mock",
                index: 1,
            })
        );
        assert_eq!(caps.optional(7), None);
    }
}
