//! JavaScript literal helpers shared by the suite writer and step handlers.

/// Escape text for a single-quoted JavaScript string literal.
///
/// Template literal bodies and regex fragments are emitted verbatim and do
/// not go through here.
pub(crate) fn escape_js(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '\'') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r"it's a\b", r"it\'s a\\b")]
    #[case("plain", "plain")]
    #[case(r#"[name="q"]"#, r#"[name="q"]"#)]
    #[case("", "")]
    fn escapes_quotes_and_backslashes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_js(input), expected);
    }
}
