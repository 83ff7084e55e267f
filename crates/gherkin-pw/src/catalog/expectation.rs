//! Element expectation conditions and their Playwright assertions.

use std::fmt;

use crate::js::escape_js;

/// Condition phrase accepted by the element expectation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// `matches the text`: exact text.
    MatchesText,
    /// `contains the text`: substring text.
    ContainsText,
    /// `does exist`: element is visible.
    Exists,
    /// `does not exist`: element is not visible.
    NotExists,
    /// `has the class`: class attribute matches a pattern fragment.
    HasClass,
    /// `does not have the class`: negated class match.
    LacksClass,
}

impl Condition {
    /// Every supported condition.
    pub const ALL: [Self; 6] = [
        Self::MatchesText,
        Self::ContainsText,
        Self::Exists,
        Self::NotExists,
        Self::HasClass,
        Self::LacksClass,
    ];

    /// Phrase used for this condition in feature files.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::MatchesText => "matches the text",
            Self::ContainsText => "contains the text",
            Self::Exists => "does exist",
            Self::NotExists => "does not exist",
            Self::HasClass => "has the class",
            Self::LacksClass => "does not have the class",
        }
    }

    /// Look up the condition named by `phrase`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.phrase() == phrase)
    }

    /// Render the assertion for `selector`; `text` is ignored by the
    /// visibility conditions. Class text is a regex fragment and is not
    /// escaped.
    #[must_use]
    pub fn assertion(self, selector: &str, text: &str) -> String {
        let locator = format!("page.locator('{}')", escape_js(selector));
        match self {
            Self::MatchesText => {
                format!("await expect({locator}).toHaveText('{}');", escape_js(text))
            }
            Self::ContainsText => {
                format!("await expect({locator}).toContainText('{}');", escape_js(text))
            }
            Self::Exists => format!("await expect({locator}).toBeVisible();"),
            Self::NotExists => format!("await expect({locator}).not.toBeVisible();"),
            Self::HasClass => format!("await expect({locator}).toHaveClass(/{text}/);"),
            Self::LacksClass => format!("await expect({locator}).not.toHaveClass(/{text}/);"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Render an element expectation, or an unsupported-condition comment when
/// `condition` names no known [`Condition`].
///
/// # Examples
///
/// ```
/// use gherkin_pw::catalog::render_expectation;
///
/// assert_eq!(
///     render_expectation("#title", "matches the text", "Welcome"),
///     "await expect(page.locator('#title')).toHaveText('Welcome');"
/// );
/// assert_eq!(
///     render_expectation("#title", "sparkles", ""),
///     "// Unsupported condition: sparkles"
/// );
/// ```
#[must_use]
pub fn render_expectation(selector: &str, condition: &str, text: &str) -> String {
    Condition::from_phrase(condition).map_or_else(
        || format!("// Unsupported condition: {condition}"),
        |known| known.assertion(selector, text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrases_round_trip_through_lookup() {
        for condition in Condition::ALL {
            assert_eq!(Condition::from_phrase(condition.phrase()), Some(condition));
            assert_eq!(condition.to_string(), condition.phrase());
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Condition::from_phrase("Matches the text"), None);
        assert_eq!(Condition::from_phrase("does exist "), None);
    }

    #[test]
    fn class_text_is_a_pattern_fragment() {
        assert_eq!(
            render_expectation("li", "has the class", "item-\\d+"),
            "await expect(page.locator('li')).toHaveClass(/item-\\d+/);"
        );
    }

    #[test]
    fn visibility_ignores_text() {
        assert_eq!(
            render_expectation("#x", "does not exist", "ignored"),
            "await expect(page.locator('#x')).not.toBeVisible();"
        );
    }
}
