//! Translate Gherkin feature files into Playwright test suites.
//!
//! The crate has two halves:
//!
//! - [`catalog`]: the fixed, ordered table of step phrases and the handlers
//!   that render each recognised step as one line of Playwright code.
//! - [`transform`]: the single-pass scanner that walks a feature document,
//!   tracks scenarios and docstrings, and assembles the output suite.
//!
//! Everything here is pure string processing. Reading and writing files is
//! left to the `gherkin-pw` binary.
//!
//! # Example
//!
//! ```
//! let source = "Feature: Login\nScenario: success\nWhen I go to the \"https://x.test\" url\n";
//! let suite = gherkin_pw::convert_feature(source);
//! assert!(suite.contains("test('success', async ({ page }) => {"));
//! assert!(suite.contains("await page.goto('https://x.test');"));
//! ```

pub mod catalog;
mod js;
pub mod transform;

pub use catalog::{CATALOG, CatalogEntry, StepAction, Translation, translate_step};
pub use transform::{Conversion, convert, convert_feature};
