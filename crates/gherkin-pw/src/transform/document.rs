//! Output assembly for the generated Playwright suite.

use crate::js::escape_js;

const IMPORT: &str = "import { test, expect } from '@playwright/test';\n\n";
const BEFORE_EACH: &str =
    "  test.beforeEach(async ({ page }) => {\n    // Add any setup steps here\n  });\n\n";
const STATEMENT_INDENT: &str = "    ";

/// Suite name used when the first line names no feature.
pub const FALLBACK_FEATURE_NAME: &str = "Converted Feature";

/// Writes the suite text, keeping test blocks balanced.
#[derive(Debug)]
pub(crate) struct SuiteWriter {
    out: String,
    test_open: bool,
    tests: usize,
}

impl SuiteWriter {
    /// Start a suite: import, `test.describe` opening and setup hook.
    pub(crate) fn new(feature_name: &str) -> Self {
        let mut out = String::from(IMPORT);
        out.push_str(&format!(
            "test.describe('{}', () => {{\n",
            escape_js(feature_name)
        ));
        out.push_str(BEFORE_EACH);
        Self {
            out,
            test_open: false,
            tests: 0,
        }
    }

    /// Close any open test and open one named `name`.
    pub(crate) fn open_test(&mut self, name: &str) {
        if self.test_open {
            self.out.push_str("  });\n\n");
        }
        self.out.push_str(&format!(
            "  test('{}', async ({{ page }}) => {{\n",
            escape_js(name)
        ));
        self.test_open = true;
        self.tests += 1;
    }

    /// Append one statement to the current test.
    pub(crate) fn push_statement(&mut self, statement: &str) {
        self.out.push_str(STATEMENT_INDENT);
        self.out.push_str(statement);
        self.out.push('\n');
    }

    /// Number of test blocks opened so far.
    pub(crate) const fn tests(&self) -> usize {
        self.tests
    }

    /// Close the last test and the suite.
    pub(crate) fn finish(mut self) -> String {
        if self.test_open {
            self.out.push_str("  });\n");
        }
        self.out.push_str("});\n");
        self.out
    }
}

/// Suite name from the first document line: the first `Feature:` label is
/// removed and whitespace trimmed.
#[must_use]
pub fn feature_name(first_line: Option<&str>) -> String {
    let name = first_line
        .map(|line| line.trim().replacen("Feature:", "", 1))
        .unwrap_or_default();
    let name = name.trim();
    if name.is_empty() {
        FALLBACK_FEATURE_NAME.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Feature: Login"), "Login")]
    #[case(Some("  Feature:Checkout  "), "Checkout")]
    #[case(Some("Shopping cart"), "Shopping cart")]
    #[case(Some("Feature:"), FALLBACK_FEATURE_NAME)]
    #[case(Some("   "), FALLBACK_FEATURE_NAME)]
    #[case(None, FALLBACK_FEATURE_NAME)]
    fn derives_feature_name(#[case] line: Option<&str>, #[case] expected: &str) {
        assert_eq!(feature_name(line), expected);
    }

    #[test]
    fn empty_suite_is_balanced() {
        let suite = SuiteWriter::new("Empty").finish();
        assert_eq!(
            suite,
            "import { test, expect } from '@playwright/test';\n\n\
             test.describe('Empty', () => {\n\
             \x20 test.beforeEach(async ({ page }) => {\n\
             \x20   // Add any setup steps here\n\
             \x20 });\n\n\
             });\n"
        );
    }

    #[test]
    fn consecutive_tests_are_separated_by_a_blank_line() {
        let mut writer = SuiteWriter::new("F");
        writer.open_test("a");
        writer.push_statement("// one");
        writer.open_test("b");
        assert_eq!(writer.tests(), 2);
        let suite = writer.finish();
        assert!(suite.ends_with(
            "  test('a', async ({ page }) => {\n    // one\n  });\n\n  test('b', async ({ page }) => {\n  });\n});\n"
        ));
    }
}
