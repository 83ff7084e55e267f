//! Step keyword detection.
//!
//! [`StepKeyword`] is how the document scanner decides whether a trimmed
//! line is a step at all. The step catalog itself is not keyword-aware: its
//! phrases carry the keyword text they expect.

use std::fmt;

/// Keyword that opens a step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action when testing behaviour.
    When,
    /// Assert the expected outcome of a scenario.
    Then,
    /// Additional conditions that share context with the previous step.
    And,
}

impl StepKeyword {
    /// Every keyword, in the order the scanner probes them. Other Gherkin
    /// keywords such as `But` do not open a step line.
    pub const ALL: [Self; 4] = [Self::Given, Self::When, Self::Then, Self::And];

    /// Return the keyword as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_pw_patterns::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::And.as_str(), "And");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
        }
    }

    /// Detect the keyword a step line starts with.
    ///
    /// Detection is a case-sensitive prefix test on the already trimmed line,
    /// matching how feature files spell their keywords.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_pw_patterns::StepKeyword;
    ///
    /// assert_eq!(
    ///     StepKeyword::from_line_prefix("When I click on the \"#go\" button"),
    ///     Some(StepKeyword::When)
    /// );
    /// assert_eq!(StepKeyword::from_line_prefix("when lowercase"), None);
    /// assert_eq!(StepKeyword::from_line_prefix("But not this"), None);
    /// assert_eq!(StepKeyword::from_line_prefix("Scenario: x"), None);
    /// ```
    #[must_use]
    pub fn from_line_prefix(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| line.starts_with(keyword.as_str()))
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Given I mock \"GET\" \"/x\"", Some(StepKeyword::Given))]
    #[case("When I go to the \"/\" url", Some(StepKeyword::When))]
    #[case("Then I expect that mock \"/x\" was called", Some(StepKeyword::Then))]
    #[case("And I am a european user", Some(StepKeyword::And))]
    #[case("But nothing else", None)]
    #[case("Feature: Login", None)]
    #[case("# Given a comment", None)]
    #[case("given lowercase", None)]
    #[case("", None)]
    fn detects_line_prefix(#[case] line: &str, #[case] expected: Option<StepKeyword>) {
        assert_eq!(StepKeyword::from_line_prefix(line), expected);
    }

    #[test]
    fn display_matches_as_str() {
        for keyword in StepKeyword::ALL {
            assert_eq!(keyword.to_string(), keyword.as_str());
        }
    }
}
